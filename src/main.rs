use clap::Parser;
use serial_url_scanner::config::{APP_NAME, VERSION};
use serial_url_scanner::domain::model::Platform;
use serial_url_scanner::utils::{logger, validation::Validate};
use serial_url_scanner::{
    CliConfig, LineProcessor, ScannerConfig, Supervisor, SystemLauncher, SystemPortLister,
    SystemSerialTransport, UrlOpener,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("{} v{} starting...", APP_NAME, VERSION);

    let config = ScannerConfig::default();
    config.validate()?;
    tracing::debug!("Scanner config: {:?}", config);

    let platform = Platform::current();
    tracing::debug!("URL handler platform: {}", platform);

    let opener = UrlOpener::new(platform, Arc::new(SystemLauncher));
    let supervisor = Supervisor::new(
        Arc::new(SystemPortLister),
        Arc::new(SystemSerialTransport),
        LineProcessor::new(opener),
        config,
    );

    let cancel = CancellationToken::new();
    let watchdog = tokio::spawn({
        let cancel = cancel.clone();
        async move { supervisor.run(cancel).await }
    });

    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            // Without a signal handler the only way out is process termination.
            tracing::warn!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }

    cancel.cancel();
    watchdog.await?;
    tracing::info!("{} stopped", APP_NAME);

    Ok(())
}
