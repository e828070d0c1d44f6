use crate::config::LINE_QUEUE_CAPACITY;
use crate::core::processor::LineProcessor;
use crate::domain::model::{MonitorState, PortId, ReadEvent, SerialSettings};
use crate::domain::ports::{LineReader, SerialTransport};
use crate::utils::error::{Result, ScannerError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Watches a single port: `Opening → Reading → Closed`.
///
/// A monitor owns its port handle exclusively and never retries. Whatever
/// ends it (open failure, read error, end of stream, shutdown) only affects
/// this port; the supervisor reopens it on the next cycle.
pub struct PortMonitor {
    port: PortId,
    settings: SerialSettings,
    transport: Arc<dyn SerialTransport>,
    processor: LineProcessor,
}

impl PortMonitor {
    pub fn new(
        port: PortId,
        settings: SerialSettings,
        transport: Arc<dyn SerialTransport>,
        processor: LineProcessor,
    ) -> Self {
        Self {
            port,
            settings,
            transport,
            processor,
        }
    }

    /// Runs until the port closes or `cancel` fires. Returns the number of
    /// non-blank lines processed.
    pub async fn run(self, cancel: CancellationToken) -> usize {
        tracing::info!("Starting monitor on port: {}", self.port);

        let port = self.port.clone();
        let mut processed = 0;
        let result = self.read_until_closed(&cancel, &mut processed).await;

        match result {
            Ok(()) => tracing::info!("Monitor on {} closed after {} lines", port, processed),
            Err(e) if e.is_port_local() => tracing::warn!("{}", e),
            Err(e) => tracing::error!("Monitor on {} failed: {}", port, e),
        }
        tracing::debug!("Port {} is {}", port, MonitorState::Closed);
        processed
    }

    async fn read_until_closed(
        self,
        cancel: &CancellationToken,
        processed: &mut usize,
    ) -> Result<()> {
        tracing::debug!("Port {} is {}", self.port, MonitorState::Opening);
        let reader = {
            let transport = self.transport.clone();
            let port = self.port.clone();
            let settings = self.settings.clone();
            tokio::task::spawn_blocking(move || transport.open(&port, &settings)).await??
        };
        tracing::debug!("Port {} is {}", self.port, MonitorState::Reading);

        let (tx, mut rx) = mpsc::channel(LINE_QUEUE_CAPACITY);
        let reader_task = {
            let cancel = cancel.clone();
            let port = self.port.clone();
            let max_idle_reads = self.settings.max_idle_reads;
            tokio::task::spawn_blocking(move || {
                pump_lines(&port, reader, max_idle_reads, tx, cancel)
            })
        };

        let mut outcome = Ok(());
        loop {
            tokio::select! {
                received = rx.recv() => match received {
                    Some(Ok(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        self.processor.process(&self.port, &line);
                        *processed += 1;
                    }
                    Some(Err(e)) => {
                        outcome = Err(e);
                        break;
                    }
                    None => break,
                },
                _ = cancel.cancelled() => {
                    tracing::debug!("Monitor on {} received shutdown signal", self.port);
                    break;
                }
            }
        }

        // The handle must be released before the supervisor may reopen the port.
        drop(rx);
        reader_task.await?;
        outcome
    }
}

/// Blocking side of a monitor: reads lines and forwards them in arrival order.
///
/// `max_idle_reads` consecutive timeouts end the monitor with
/// [`ScannerError::Stalled`], so the supervisor gets to rescan.
fn pump_lines(
    port: &PortId,
    mut reader: Box<dyn LineReader>,
    max_idle_reads: u32,
    tx: mpsc::Sender<Result<String>>,
    cancel: CancellationToken,
) {
    let mut idle_reads = 0;
    while !cancel.is_cancelled() {
        match reader.next_event() {
            Ok(ReadEvent::Line(line)) => {
                idle_reads = 0;
                if tx.blocking_send(Ok(line)).is_err() {
                    break;
                }
            }
            Ok(ReadEvent::Idle) => {
                idle_reads += 1;
                if idle_reads >= max_idle_reads {
                    let _ = tx.blocking_send(Err(ScannerError::Stalled {
                        port: port.to_string(),
                        idle_reads,
                    }));
                    break;
                }
            }
            Ok(ReadEvent::Closed) => break,
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                break;
            }
        }
    }
}
