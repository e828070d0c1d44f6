use std::fmt;
use std::time::Duration;

/// Opaque serial device identifier as reported by the host OS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortId(String);

impl PortId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Line settings used when opening a scanner port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialSettings {
    pub baud_rate: u32,
    pub data_bits: u8,
    pub parity: serialport::Parity,
    pub stop_bits: u8,
    pub read_timeout: Duration,
    /// Consecutive read timeouts after which a quiet port is closed so the
    /// next scan can pick up newly attached devices.
    pub max_idle_reads: u32,
}

/// One step of a blocking line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A complete line, without its line terminator.
    Line(String),
    /// The read timed out before a full line arrived. Partial data is kept.
    Idle,
    /// End of stream.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Opening,
    Reading,
    Closed,
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MonitorState::Opening => "opening",
            MonitorState::Reading => "reading",
            MonitorState::Closed => "closed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    Scanning,
    Waiting,
}

/// Platform family, used to pick the URL handler command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other(String),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// The command that hands `url` to the default handler, or `None` when
    /// the platform has no known handler.
    pub fn launch_command(&self, url: &str) -> Option<LaunchCommand> {
        match self {
            Platform::Windows => Some(LaunchCommand::new(
                "rundll32",
                ["url.dll,FileProtocolHandler", url],
            )),
            Platform::MacOs => Some(LaunchCommand::new("open", [url])),
            Platform::Linux => Some(LaunchCommand::new("xdg-open", [url])),
            Platform::Other(_) => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::MacOs => f.write_str("macos"),
            Platform::Linux => f.write_str("linux"),
            Platform::Other(os) => f.write_str(os),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}
