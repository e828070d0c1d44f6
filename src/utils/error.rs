use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Failed to enumerate serial ports: {0}")]
    Enumeration(#[from] serialport::Error),

    #[error("Failed to open port {port}: {source}")]
    PortOpen {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Read error on port {port}: {source}")]
    Read {
        port: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No data from port {port} after {idle_reads} read timeouts")]
    Stalled { port: String, idle_reads: u32 },

    #[error("Invalid URL: {candidate}")]
    InvalidUrl { candidate: String },

    #[error("Failed to open URL {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ScannerError {
    /// Errors that end a single port monitor without touching the others.
    pub fn is_port_local(&self) -> bool {
        matches!(
            self,
            Self::PortOpen { .. } | Self::Read { .. } | Self::Stalled { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScannerError>;
