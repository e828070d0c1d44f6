use crate::domain::model::Platform;
use crate::domain::ports::UrlLauncher;
use crate::utils::error::{Result, ScannerError};
use crate::utils::validation::validate_url;
use std::sync::Arc;

/// Hands validated URLs to the platform's default handler.
#[derive(Clone)]
pub struct UrlOpener {
    platform: Platform,
    launcher: Arc<dyn UrlLauncher>,
}

impl UrlOpener {
    pub fn new(platform: Platform, launcher: Arc<dyn UrlLauncher>) -> Self {
        Self { platform, launcher }
    }

    /// Fire-and-forget open. Failures are logged, never returned or retried.
    pub fn open(&self, url: &str) {
        match self.try_open(url) {
            Ok(()) => tracing::info!("Opened URL: {}", url),
            Err(e @ ScannerError::InvalidUrl { .. }) => tracing::debug!("{}", e),
            Err(e @ ScannerError::UnsupportedPlatform { .. }) => tracing::warn!("{}", e),
            Err(e) => tracing::error!("{}", e),
        }
    }

    pub fn try_open(&self, url: &str) -> Result<()> {
        validate_url(url)?;
        let command = self
            .platform
            .launch_command(url)
            .ok_or_else(|| ScannerError::UnsupportedPlatform {
                os: self.platform.to_string(),
            })?;

        tracing::debug!("Launching {} {:?}", command.program, command.args);
        self.launcher
            .launch(&command)
            .map_err(|source| ScannerError::Launch {
                url: url.to_string(),
                source,
            })
    }
}
