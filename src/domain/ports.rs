use crate::domain::model::{LaunchCommand, PortId, ReadEvent, SerialSettings};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PortLister: Send + Sync {
    /// Currently connected serial devices. An empty list is not an error.
    async fn list_ports(&self) -> Result<Vec<PortId>>;
}

pub trait SerialTransport: Send + Sync {
    /// Opens `port` for blocking line reads. Called from the blocking pool.
    fn open(&self, port: &PortId, settings: &SerialSettings) -> Result<Box<dyn LineReader>>;
}

/// Blocking, newline-delimited reader over an open port. Dropping it
/// releases the port.
pub trait LineReader: Send {
    fn next_event(&mut self) -> Result<ReadEvent>;
}

pub trait UrlLauncher: Send + Sync {
    /// Starts `command` without waiting for it to exit.
    fn launch(&self, command: &LaunchCommand) -> std::io::Result<()>;
}
