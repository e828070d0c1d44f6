pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ScannerConfig;

pub use adapters::{SystemLauncher, SystemPortLister, SystemSerialTransport};
pub use core::{opener::UrlOpener, processor::LineProcessor, supervisor::Supervisor};
pub use utils::error::{Result, ScannerError};
