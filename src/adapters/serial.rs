// Host serial facilities, backed by the `serialport` crate.

use crate::domain::model::{PortId, ReadEvent, SerialSettings};
use crate::domain::ports::{LineReader, PortLister, SerialTransport};
use crate::utils::error::{Result, ScannerError};
use async_trait::async_trait;
use serialport::{DataBits, Parity, StopBits};
use std::io::{self, BufRead, BufReader, Read};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPortLister;

#[async_trait]
impl PortLister for SystemPortLister {
    async fn list_ports(&self) -> Result<Vec<PortId>> {
        let ports = tokio::task::spawn_blocking(serialport::available_ports).await??;

        Ok(ports
            .into_iter()
            .map(|p| p.port_name)
            .filter(|name| is_listed_port(name))
            .map(PortId::new)
            .collect())
    }
}

/// On macOS every device shows up twice; the `/dev/tty.*` twin blocks on open
/// waiting for carrier detect, so only the `/dev/cu.*` device is kept.
fn is_listed_port(_name: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        !_name.starts_with("/dev/tty.")
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSerialTransport;

impl SerialTransport for SystemSerialTransport {
    fn open(&self, port: &PortId, settings: &SerialSettings) -> Result<Box<dyn LineReader>> {
        let handle = serialport::new(port.as_str(), settings.baud_rate)
            .data_bits(to_serialport_data_bits(settings.data_bits))
            .parity(settings.parity)
            .stop_bits(to_serialport_stop_bits(settings.stop_bits))
            .timeout(settings.read_timeout)
            .open()
            .map_err(|source| ScannerError::PortOpen {
                port: port.to_string(),
                source,
            })?;

        tracing::debug!(
            "Opened {} at {} baud ({}-{}-{})",
            port,
            settings.baud_rate,
            settings.data_bits,
            match settings.parity {
                Parity::None => 'N',
                Parity::Odd => 'O',
                Parity::Even => 'E',
            },
            settings.stop_bits
        );
        Ok(Box::new(SerialLineReader::new(port.clone(), handle)))
    }
}

pub fn to_serialport_data_bits(bits: u8) -> DataBits {
    match bits {
        5 => DataBits::Five,
        6 => DataBits::Six,
        7 => DataBits::Seven,
        _ => DataBits::Eight,
    }
}

pub fn to_serialport_stop_bits(bits: u8) -> StopBits {
    match bits {
        2 => StopBits::Two,
        _ => StopBits::One,
    }
}

/// Newline-delimited reader over any blocking byte source.
///
/// Bytes received before a read timeout are kept until the rest of the line
/// arrives. Lines are decoded as lossy UTF-8 with `\n` / `\r\n` removed.
pub struct SerialLineReader<R> {
    port: PortId,
    reader: BufReader<R>,
    pending: Vec<u8>,
}

impl<R: Read> SerialLineReader<R> {
    pub fn new(port: PortId, source: R) -> Self {
        Self {
            port,
            reader: BufReader::new(source),
            pending: Vec::new(),
        }
    }

    fn take_line(&mut self) -> String {
        let bytes = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&bytes)
            .trim_end_matches(['\r', '\n'])
            .to_string()
    }
}

impl<R: Read + Send> LineReader for SerialLineReader<R> {
    fn next_event(&mut self) -> Result<ReadEvent> {
        match self.reader.read_until(b'\n', &mut self.pending) {
            Ok(0) if self.pending.is_empty() => Ok(ReadEvent::Closed),
            // Either a full line, or the stream ended mid-line.
            Ok(_) => Ok(ReadEvent::Line(self.take_line())),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(ReadEvent::Idle)
            }
            Err(source) => Err(ScannerError::Read {
                port: self.port.to_string(),
                source,
            }),
        }
    }
}
