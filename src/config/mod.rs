#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::SerialSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use std::time::Duration;

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_secs(5);
/// About 500 s of silence at the default read timeout.
pub const MAX_IDLE_READS: u32 = 100;
/// Lines buffered between a port's reader thread and its processing task.
pub const LINE_QUEUE_CAPACITY: usize = 32;

/// Process-wide fixed settings. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub serial: SerialSettings,
    pub restart_delay: Duration,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            serial: SerialSettings {
                baud_rate: DEFAULT_BAUD_RATE,
                data_bits: 8,
                parity: serialport::Parity::None,
                stop_bits: 1,
                read_timeout: DEFAULT_READ_TIMEOUT,
                max_idle_reads: MAX_IDLE_READS,
            },
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

impl ScannerConfig {
    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }

    pub fn with_max_idle_reads(mut self, reads: u32) -> Self {
        self.serial.max_idle_reads = reads;
        self
    }
}

impl Validate for ScannerConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("baud_rate", u64::from(self.serial.baud_rate), 1)?;
        validate_range("data_bits", self.serial.data_bits, 5, 8)?;
        validate_range("stop_bits", self.serial.stop_bits, 1, 2)?;
        validate_positive_number(
            "read_timeout_ms",
            self.serial.read_timeout.as_millis() as u64,
            1,
        )?;
        validate_positive_number("max_idle_reads", u64::from(self.serial.max_idle_reads), 1)?;
        Ok(())
    }
}
