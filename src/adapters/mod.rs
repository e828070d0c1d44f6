// Adapters layer: concrete implementations of the domain ports over host facilities.

pub mod launcher;
pub mod serial;

pub use launcher::SystemLauncher;
pub use serial::{SystemPortLister, SystemSerialTransport};
