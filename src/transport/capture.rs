use super::Transport;
use crate::Error;
use std::collections::VecDeque;

/// In-memory transport
///
/// Records every transaction instead of reaching a device, and answers queries with canned replies. Handy for tests and for previewing the bytes a document compiles to.
///
/// ```rust
/// use thermal_rs::transport::{CaptureTransport, Transport};
///
/// let mut transport = CaptureTransport::new();
/// transport.push_response(vec![0x00]);
/// assert_eq!(2, transport.send(&[0x1b, 0x40]));
/// assert_eq!(vec![0x00], transport.query(&[0x10, 0x04, 0x01], 1));
/// assert_eq!(vec![0x1b, 0x40, 0x10, 0x04, 0x01], transport.bytes());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureTransport {
    transactions: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    connected: bool
}

impl CaptureTransport {
    pub fn new() -> CaptureTransport {
        CaptureTransport {
            transactions: Vec::new(),
            responses: VecDeque::new(),
            connected: true
        }
    }

    /// A transport that behaves like an unplugged printer
    pub fn disconnected() -> CaptureTransport {
        CaptureTransport {
            connected: false,
            ..CaptureTransport::new()
        }
    }

    /// Queues the reply for the next query
    pub fn push_response(&mut self, response: Vec<u8>) {
        self.responses.push_back(response);
    }

    /// Every payload sent so far, one entry per transaction
    pub fn transactions(&self) -> &[Vec<u8>] {
        &self.transactions
    }

    /// All the sent bytes, concatenated
    pub fn bytes(&self) -> Vec<u8> {
        self.transactions.concat()
    }

    /// Forgets the recorded transactions
    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}

impl Transport for CaptureTransport {
    fn send(&mut self, payload: &[u8]) -> usize {
        if !self.connected {
            return 0;
        }
        self.transactions.push(payload.to_vec());
        payload.len()
    }

    fn query(&mut self, payload: &[u8], response_length: usize) -> Vec<u8> {
        if !self.connected {
            return Vec::new();
        }
        self.transactions.push(payload.to_vec());
        match self.responses.pop_front() {
            Some(response) if response.len() >= response_length => response[..response_length].to_vec(),
            // Short replies time out on real hardware
            _ => Vec::new()
        }
    }

    fn check_connection(&mut self) -> Result<(), Error> {
        if self.connected {
            Ok(())
        } else {
            Err(Error::PortNotFound("capture".to_string()))
        }
    }
}
