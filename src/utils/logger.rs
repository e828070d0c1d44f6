use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `--verbose` adds per-line debug
/// output (ignored lines, launch commands, monitor state changes).
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "serial_url_scanner=debug,warn"
    } else {
        "serial_url_scanner=info,warn"
    }
}

/// Logs go to stderr with wall-clock timestamps; colors only on a terminal.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_timer(fmt::time::SystemTime)
                .with_target(false)
                .compact(),
        )
        .init();
}
