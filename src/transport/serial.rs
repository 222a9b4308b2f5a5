extern crate log;

use super::{Transport, write_chunks, VIRTUAL_PORT_CHUNK_SIZE, NATIVE_PORT_CHUNK_SIZE, DEFAULT_CHUNK_DELAY};
use crate::Error;
use log::{debug, warn};
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, SerialPortType, StopBits};
use serde::{Serialize, Deserialize};
use std::io::Read;
use std::time::Duration;

/// Everything needed to open a serial port
///
/// Framing is always 8 data bits, no parity, one stop bit and no handshake.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SerialSettings {
    /// Name of the port, `COM4` or `/dev/ttyUSB0` for example
    pub port_name: String,
    pub baud_rate: u32,
    /// How long a reply may take to arrive in full
    pub read_timeout: Duration,
    /// How long a single chunk may take to be written
    pub write_timeout: Duration,
    /// Size of each written chunk. Detected from the port type when `None`
    pub chunk_size: Option<usize>,
    /// Pause between chunks
    pub chunk_delay: Duration
}

impl SerialSettings {
    pub fn new<A: Into<String>>(port_name: A, baud_rate: u32) -> SerialSettings {
        SerialSettings {
            port_name: port_name.into(),
            baud_rate,
            read_timeout: Duration::from_millis(1000),
            write_timeout: Duration::from_millis(1000),
            chunk_size: None,
            chunk_delay: DEFAULT_CHUNK_DELAY
        }
    }
}

/// Serial port transport
///
/// The port is opened at the start of each [send](Transport::send) or [query](Transport::query) and dropped (thus closed) before the call returns, on every path. Nothing is held between calls, so other programs may use the port in between.
pub struct SerialTransport {
    settings: SerialSettings,
    /// Resolved on first use when the settings leave it open
    detected_chunk_size: Option<usize>
}

impl SerialTransport {
    pub fn new(settings: SerialSettings) -> SerialTransport {
        SerialTransport {
            settings,
            detected_chunk_size: None
        }
    }

    pub fn settings(&self) -> &SerialSettings {
        &self.settings
    }

    /// Chunk size in use, probing the port type if it was not configured
    ///
    /// Usb-cdc ports get the small chunk size, everything else the native one.
    pub fn chunk_size(&mut self) -> usize {
        if let Some(chunk_size) = self.settings.chunk_size {
            return chunk_size;
        }
        if let Some(chunk_size) = self.detected_chunk_size {
            return chunk_size;
        }
        let chunk_size = match serialport::available_ports() {
            Ok(ports) => ports.iter()
                .find(|port| port.port_name == self.settings.port_name)
                .map(|port| match port.port_type {
                    SerialPortType::UsbPort(_) => VIRTUAL_PORT_CHUNK_SIZE,
                    _ => NATIVE_PORT_CHUNK_SIZE
                })
                .unwrap_or(NATIVE_PORT_CHUNK_SIZE),
            Err(e) => {
                debug!("Could not enumerate serial ports ({}), assuming a native port", e);
                NATIVE_PORT_CHUNK_SIZE
            }
        };
        self.detected_chunk_size = Some(chunk_size);
        chunk_size
    }

    fn open(&self) -> Result<Box<dyn SerialPort>, Error> {
        serialport::new(self.settings.port_name.as_str(), self.settings.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(self.settings.write_timeout)
            .open()
            .map_err(|e| classify_open_error(&self.settings.port_name, e))
    }

    fn write_payload(&mut self, port: &mut dyn SerialPort, payload: &[u8]) -> Result<usize, Error> {
        let chunk_size = self.chunk_size();
        let written = write_chunks(payload, chunk_size, self.settings.chunk_delay, |chunk| {
            port.write_all(chunk).map(|_| chunk.len())
        })?;
        port.flush()?;
        Ok(written)
    }
}

// Maps the open failure to one of the three connection outcomes
fn classify_open_error(port_name: &str, e: serialport::Error) -> Error {
    match e.kind() {
        serialport::ErrorKind::NoDevice => Error::PortNotFound(port_name.to_string()),
        serialport::ErrorKind::Io(std::io::ErrorKind::NotFound) => Error::PortNotFound(port_name.to_string()),
        serialport::ErrorKind::Io(std::io::ErrorKind::PermissionDenied) => Error::PortAlreadyOpen(port_name.to_string()),
        _ if e.description.to_lowercase().contains("busy") => Error::PortAlreadyOpen(port_name.to_string()),
        _ => Error::ConnectionFailed(format!("{}: {}", port_name, e))
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, payload: &[u8]) -> usize {
        let mut port = match self.open() {
            Ok(port) => port,
            Err(e) => {
                warn!("Nothing sent, {}", e);
                return 0;
            }
        };
        match self.write_payload(port.as_mut(), payload) {
            Ok(written) => {
                debug!("Sent {} bytes to {}", written, self.settings.port_name);
                written
            },
            Err(e) => {
                warn!("Write to {} failed, {}", self.settings.port_name, e);
                0
            }
        }
    }

    fn query(&mut self, payload: &[u8], response_length: usize) -> Vec<u8> {
        let mut port = match self.open() {
            Ok(port) => port,
            Err(e) => {
                warn!("Nothing queried, {}", e);
                return Vec::new();
            }
        };
        // Stale bytes would shift the reply
        if let Err(e) = port.clear(ClearBuffer::Input) {
            debug!("Could not clear the input buffer, {}", e);
        }
        if let Err(e) = self.write_payload(port.as_mut(), payload) {
            warn!("Query to {} failed, {}", self.settings.port_name, e);
            return Vec::new();
        }
        if let Err(e) = port.set_timeout(self.settings.read_timeout) {
            warn!("Could not set the read timeout, {}", e);
            return Vec::new();
        }
        let mut response = vec![0u8; response_length];
        match port.read_exact(&mut response) {
            Ok(()) => response,
            Err(e) => {
                warn!("Expected {} bytes from {}, {}", response_length, self.settings.port_name, e);
                Vec::new()
            }
        }
    }

    fn check_connection(&mut self) -> Result<(), Error> {
        self.open().map(|_port| ())
    }
}
