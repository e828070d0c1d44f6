use crate::core::extract::{extract_urls, Extraction};
use crate::core::normalize::normalize_line;
use crate::core::opener::UrlOpener;
use crate::domain::model::PortId;

/// Runs one scanned line through normalize → extract → validate → open.
#[derive(Clone)]
pub struct LineProcessor {
    opener: UrlOpener,
}

impl LineProcessor {
    pub fn new(opener: UrlOpener) -> Self {
        Self { opener }
    }

    /// Returns the number of URLs handed to the opener.
    pub fn process(&self, port: &PortId, raw_line: &str) -> usize {
        if raw_line.trim().is_empty() {
            return 0;
        }
        tracing::info!("Scan event from {}: {}", port, raw_line);

        let line = normalize_line(raw_line);
        let extraction = extract_urls(&line);
        if extraction == Extraction::None {
            tracing::debug!("Ignoring line from {}: {:?}", port, line);
            return 0;
        }

        let urls = extraction.urls();
        for url in &urls {
            self.opener.open(url);
        }
        urls.len()
    }
}
