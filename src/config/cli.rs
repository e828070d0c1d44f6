use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "serial-url-scanner")]
#[command(version)]
#[command(about = "Opens URLs scanned by serial barcode/QR readers")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
