#![allow(dead_code)]

use async_trait::async_trait;
use serial_url_scanner::domain::model::{LaunchCommand, Platform, PortId, ReadEvent, SerialSettings};
use serial_url_scanner::domain::ports::{LineReader, PortLister, SerialTransport, UrlLauncher};
use serial_url_scanner::{LineProcessor, Result, ScannerError, UrlOpener};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records launches instead of spawning processes.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    commands: Arc<Mutex<Vec<LaunchCommand>>>,
}

impl RecordingLauncher {
    pub fn commands(&self) -> Vec<LaunchCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// URL argument (always last) of each recorded launch.
    pub fn urls(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|c| c.args.last().cloned())
            .collect()
    }
}

impl UrlLauncher for RecordingLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<()> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(())
    }
}

pub fn recording_processor() -> (LineProcessor, RecordingLauncher) {
    let launcher = RecordingLauncher::default();
    let opener = UrlOpener::new(Platform::Linux, Arc::new(launcher.clone()));
    (LineProcessor::new(opener), launcher)
}

#[derive(Clone)]
pub enum PortScript {
    /// Yields these lines, then end of stream.
    Lines(Vec<String>),
    /// Never produces data; every read times out.
    Silent,
    /// Times out once before each line, then end of stream.
    Slow(Vec<String>),
    /// Yields these lines, then a read error.
    FailAfter(Vec<String>),
    /// Open fails.
    FailOpen,
}

#[derive(Default)]
pub struct ScriptedTransport {
    scripts: HashMap<String, PortScript>,
    opens: AtomicUsize,
}

impl ScriptedTransport {
    pub fn with_port(mut self, port: &str, script: PortScript) -> Self {
        self.scripts.insert(port.to_string(), script);
        self
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl SerialTransport for ScriptedTransport {
    fn open(&self, port: &PortId, _settings: &SerialSettings) -> Result<Box<dyn LineReader>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        match self.scripts.get(port.as_str()) {
            Some(PortScript::Lines(lines)) => Ok(Box::new(ScriptedReader::Lines(
                lines.iter().cloned().collect(),
            ))),
            Some(PortScript::Silent) => Ok(Box::new(ScriptedReader::Silent)),
            Some(PortScript::Slow(lines)) => Ok(Box::new(ScriptedReader::Slow {
                lines: lines.iter().cloned().collect(),
                ready: false,
            })),
            Some(PortScript::FailAfter(lines)) => Ok(Box::new(ScriptedReader::FailAfter {
                port: port.to_string(),
                lines: lines.iter().cloned().collect(),
            })),
            Some(PortScript::FailOpen) | None => Err(ScannerError::PortOpen {
                port: port.to_string(),
                source: serialport::Error::new(serialport::ErrorKind::NoDevice, "no such device"),
            }),
        }
    }
}

enum ScriptedReader {
    Lines(VecDeque<String>),
    Silent,
    Slow {
        lines: VecDeque<String>,
        ready: bool,
    },
    FailAfter {
        port: String,
        lines: VecDeque<String>,
    },
}

impl LineReader for ScriptedReader {
    fn next_event(&mut self) -> Result<ReadEvent> {
        match self {
            ScriptedReader::Lines(lines) => Ok(match lines.pop_front() {
                Some(line) => ReadEvent::Line(line),
                None => ReadEvent::Closed,
            }),
            ScriptedReader::Silent => {
                std::thread::sleep(Duration::from_millis(10));
                Ok(ReadEvent::Idle)
            }
            ScriptedReader::Slow { lines, ready } => {
                if !*ready {
                    *ready = true;
                    return Ok(ReadEvent::Idle);
                }
                *ready = false;
                Ok(match lines.pop_front() {
                    Some(line) => ReadEvent::Line(line),
                    None => ReadEvent::Closed,
                })
            }
            ScriptedReader::FailAfter { port, lines } => match lines.pop_front() {
                Some(line) => Ok(ReadEvent::Line(line)),
                None => Err(ScannerError::Read {
                    port: port.clone(),
                    source: io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"),
                }),
            },
        }
    }
}

pub enum ListOutcome {
    Fail,
    Ports(Vec<&'static str>),
}

/// Serves queued outcomes in order, then repeats `fallback` forever.
pub struct ScriptedLister {
    outcomes: Mutex<VecDeque<ListOutcome>>,
    fallback: Vec<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedLister {
    pub fn new(outcomes: Vec<ListOutcome>, fallback: Vec<&'static str>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fixed(ports: Vec<&'static str>) -> Self {
        Self::new(Vec::new(), ports)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortLister for ScriptedLister {
    async fn list_ports(&self) -> Result<Vec<PortId>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.outcomes.lock().unwrap().pop_front();
        let ports = match next {
            Some(ListOutcome::Fail) => {
                return Err(ScannerError::Enumeration(serialport::Error::new(
                    serialport::ErrorKind::Unknown,
                    "enumeration failed",
                )))
            }
            Some(ListOutcome::Ports(ports)) => ports,
            None => self.fallback.clone(),
        };
        Ok(ports.into_iter().map(PortId::from).collect())
    }
}

pub fn scan_lines(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("URL: https://app.carbon.ms/job/{}", i))
        .collect()
}

/// Polls `condition` until it holds or `timeout` elapses.
pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

pub async fn finishes_within<F: Future>(timeout: Duration, future: F) -> Option<F::Output> {
    tokio::time::timeout(timeout, future).await.ok()
}
