use crate::domain::model::LaunchCommand;
use crate::domain::ports::UrlLauncher;
use std::io;
use std::process::Stdio;

/// Spawns the URL handler as a detached child. The child is never awaited;
/// tokio reaps it in the background once it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<()> {
        tokio::process::Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }
}
