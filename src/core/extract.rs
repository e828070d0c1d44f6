use crate::utils::validation::is_valid_url;
use once_cell::sync::Lazy;
use regex::Regex;

const LOCALHOST_PREFIX: &str = "http://localhost";
const CARBON_DOMAIN: &str = "carbon.ms";

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("URL pattern is valid"));

static CARBON_FRAGMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[A-Za-z0-9\-._]*carbon\.ms[^\s<>"']*"#).expect("carbon.ms pattern is valid")
});

/// Which rule produced the URLs for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Line is an explicit `http://localhost` URL.
    Localhost(String),
    /// Explicit `http(s)://` URLs mentioning carbon.ms.
    CarbonUrls(Vec<String>),
    /// A bare carbon.ms domain/path, rebuilt as an https URL.
    CarbonFragment(String),
    /// Nothing to open.
    None,
}

impl Extraction {
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Extraction::Localhost(url) | Extraction::CarbonFragment(url) => vec![url.as_str()],
            Extraction::CarbonUrls(urls) => urls.iter().map(String::as_str).collect(),
            Extraction::None => Vec::new(),
        }
    }
}

/// Decides which URLs a normalized line asks to open. Every returned URL has
/// already passed validation.
pub fn extract_urls(line: &str) -> Extraction {
    if line.starts_with(LOCALHOST_PREFIX) {
        return if is_valid_url(line) {
            Extraction::Localhost(line.to_string())
        } else {
            Extraction::None
        };
    }

    if !line.to_lowercase().contains(CARBON_DOMAIN) {
        return Extraction::None;
    }

    let explicit: Vec<String> = URL_PATTERN
        .find_iter(line)
        .map(|m| m.as_str())
        .filter(|candidate| candidate.to_lowercase().contains(CARBON_DOMAIN))
        .filter(|candidate| is_valid_url(candidate))
        .map(str::to_string)
        .collect();

    if !explicit.is_empty() {
        return Extraction::CarbonUrls(explicit);
    }

    let Some(fragment) = CARBON_FRAGMENT_PATTERN.find(line) else {
        tracing::debug!("No carbon.ms fragment found in {:?}", line);
        return Extraction::None;
    };

    let fragment = fragment.as_str();
    let candidate = if fragment.starts_with("http://") || fragment.starts_with("https://") {
        fragment.to_string()
    } else {
        format!("https://{}", fragment)
    };

    if is_valid_url(&candidate) {
        Extraction::CarbonFragment(candidate)
    } else {
        Extraction::None
    }
}
