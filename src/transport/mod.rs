//! Byte transports towards the printer
//!
//! Every call is a self contained transaction: the connection is opened, used and released before the call returns, whatever happens in between. Failures never escape a transport, a failed write reports 0 bytes and a failed or short read reports an empty buffer.

pub use self::capture::CaptureTransport;
pub use self::serial::{SerialTransport, SerialSettings};
pub use self::usb::{UsbTransport, UsbSettings};

mod capture;
mod serial;
mod usb;

use crate::Error;
use std::time::Duration;

/// Chunk size for usb-cdc and other virtual serial ports
pub const VIRTUAL_PORT_CHUNK_SIZE: usize = 64;
/// Chunk size for native hardware serial ports
pub const NATIVE_PORT_CHUNK_SIZE: usize = 256;
/// Pause between two chunks of the same write
pub const DEFAULT_CHUNK_DELAY: Duration = Duration::from_millis(10);

/// Something bytes can be pushed through towards a printer
///
/// Implement this to reach printers by other means, an OS print queue for example.
pub trait Transport {
    /// Sends the payload, returns the number of bytes written (0 on any failure)
    fn send(&mut self, payload: &[u8]) -> usize;

    /// Sends the payload and reads back exactly `response_length` bytes within the same transaction
    ///
    /// Anything short of the full reply results in an empty buffer.
    fn query(&mut self, payload: &[u8], response_length: usize) -> Vec<u8>;

    /// Opens and releases the connection, reporting why it could not be opened
    fn check_connection(&mut self) -> Result<(), Error>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, payload: &[u8]) -> usize {
        (**self).send(payload)
    }

    fn query(&mut self, payload: &[u8], response_length: usize) -> Vec<u8> {
        (**self).query(payload, response_length)
    }

    fn check_connection(&mut self) -> Result<(), Error> {
        (**self).check_connection()
    }
}

/// Pushes the payload through `write` in chunks of at most `chunk_size` bytes
///
/// The pause is only taken between chunks. Returns the sum of the chunk lengths, the first failing chunk aborts the whole write.
///
/// ```rust
/// use thermal_rs::transport::write_chunks;
/// use std::time::Duration;
///
/// let mut chunks = Vec::new();
/// let written = write_chunks(&[0u8; 3 * 64 + 5], 64, Duration::from_millis(0), |chunk| {
///     chunks.push(chunk.len());
///     Ok::<usize, ()>(chunk.len())
/// });
/// assert_eq!(Ok(3 * 64 + 5), written);
/// assert_eq!(vec![64, 64, 64, 5], chunks);
/// ```
pub fn write_chunks<E, F>(payload: &[u8], chunk_size: usize, pause: Duration, mut write: F) -> Result<usize, E>
where F: FnMut(&[u8]) -> Result<usize, E> {
    let mut written = 0;
    for (idx, chunk) in payload.chunks(chunk_size.max(1)).enumerate() {
        if idx > 0 && !pause.is_zero() {
            std::thread::sleep(pause);
        }
        written += write(chunk)?;
    }
    log::trace!("Wrote {} bytes in chunks of {}", written, chunk_size);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunking_splits_evenly() {
        for chunk_size in [VIRTUAL_PORT_CHUNK_SIZE, NATIVE_PORT_CHUNK_SIZE].iter() {
            let payload = vec![0xaa; 3 * chunk_size + 5];
            let mut lengths = Vec::new();
            let written = write_chunks(&payload, *chunk_size, Duration::from_millis(0), |chunk| {
                lengths.push(chunk.len());
                Ok::<usize, ()>(chunk.len())
            });
            assert_eq!(Ok(payload.len()), written);
            assert_eq!(vec![*chunk_size, *chunk_size, *chunk_size, 5], lengths);
        }
    }

    #[test]
    fn failure_aborts_remaining_chunks() {
        let mut calls = 0;
        let written = write_chunks(&[0u8; 200], 64, Duration::from_millis(0), |chunk| {
            calls += 1;
            if calls == 2 {
                Err("broken pipe")
            } else {
                Ok(chunk.len())
            }
        });
        assert_eq!(Err("broken pipe"), written);
        assert_eq!(2, calls);
    }

    #[test]
    fn empty_payload_writes_nothing() {
        let written = write_chunks(&[], 64, Duration::from_millis(0), |_chunk| -> Result<usize, ()> {
            panic!("no chunk expected")
        });
        assert_eq!(Ok(0), written);
    }
}
