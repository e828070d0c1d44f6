const BYTE_ORDER_MARK: char = '\u{feff}';

/// Scanner-added prefixes, checked in order; the first match wins.
const SCANNER_PREFIXES: [&str; 4] = ["URL:", "SCAN:", "CODE:", "DATA:"];

/// Strips surrounding whitespace, a leading byte-order mark and one known
/// scanner prefix (case-insensitive) from a captured line.
pub fn normalize_line(raw: &str) -> String {
    let mut line = raw.trim();

    if let Some(rest) = line.strip_prefix(BYTE_ORDER_MARK) {
        line = rest;
    }

    for prefix in SCANNER_PREFIXES {
        let matches = line
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            line = line[prefix.len()..].trim();
            break;
        }
    }

    line.trim_end_matches(['\r', '\n', '\t', ' ']).to_string()
}
