use crate::config::ScannerConfig;
use crate::core::monitor::PortMonitor;
use crate::core::processor::LineProcessor;
use crate::domain::model::SupervisorState;
use crate::domain::ports::{PortLister, SerialTransport};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Outcome of one scanning cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub ports_found: usize,
    pub lines_processed: usize,
    pub listing_failed: bool,
}

/// Watchdog that keeps every connected port monitored.
///
/// Each cycle lists ports, runs one monitor per port and waits for all of
/// them to close. A failed listing, an empty port list and a set of closed
/// monitors all lead to the same place: wait `restart_delay`, scan again.
pub struct Supervisor {
    lister: Arc<dyn PortLister>,
    transport: Arc<dyn SerialTransport>,
    processor: LineProcessor,
    config: ScannerConfig,
}

impl Supervisor {
    pub fn new(
        lister: Arc<dyn PortLister>,
        transport: Arc<dyn SerialTransport>,
        processor: LineProcessor,
        config: ScannerConfig,
    ) -> Self {
        Self {
            lister,
            transport,
            processor,
            config,
        }
    }

    /// Loops until `cancel` fires.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut state = SupervisorState::Scanning;

        while !cancel.is_cancelled() {
            state = match state {
                SupervisorState::Scanning => {
                    self.run_cycle(&cancel).await;
                    SupervisorState::Waiting
                }
                SupervisorState::Waiting => {
                    tracing::info!(
                        "Serial monitoring exited; restarting in {:?}...",
                        self.config.restart_delay
                    );
                    tokio::select! {
                        _ = tokio::time::sleep(self.config.restart_delay) => SupervisorState::Scanning,
                        _ = cancel.cancelled() => break,
                    }
                }
            };
        }

        tracing::info!("Watchdog stopped");
    }

    /// Runs a single scan: list ports, monitor each, wait for all to close.
    pub async fn run_cycle(&self, cancel: &CancellationToken) -> CycleReport {
        tracing::info!("Monitoring serial ports for scan events...");

        let ports = match self.lister.list_ports().await {
            Ok(ports) => ports,
            Err(e) => {
                tracing::error!("Error listing serial ports: {}", e);
                return CycleReport {
                    listing_failed: true,
                    ..CycleReport::default()
                };
            }
        };

        if ports.is_empty() {
            tracing::info!("No serial ports found");
            return CycleReport::default();
        }

        tracing::info!("Found {} serial port(s)", ports.len());
        let mut report = CycleReport {
            ports_found: ports.len(),
            ..CycleReport::default()
        };

        let mut monitors = JoinSet::new();
        for port in ports {
            let monitor = PortMonitor::new(
                port,
                self.config.serial.clone(),
                self.transport.clone(),
                self.processor.clone(),
            );
            monitors.spawn(monitor.run(cancel.clone()));
        }

        while let Some(joined) = monitors.join_next().await {
            match joined {
                Ok(lines) => report.lines_processed += lines,
                Err(e) => tracing::error!("Monitor task failed: {}", e),
            }
        }

        report
    }
}
