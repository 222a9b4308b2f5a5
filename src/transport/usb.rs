extern crate log;

use super::{Transport, write_chunks, VIRTUAL_PORT_CHUNK_SIZE, DEFAULT_CHUNK_DELAY};
use crate::Error;
use log::{debug, warn};
use rusb::{Context, DeviceHandle, Direction, TransferType, UsbContext};
use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Everything needed to reach a printer through its usb bulk endpoints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UsbSettings {
    /// Vendor id for the printer
    pub vendor_id: u16,
    /// Product id for the printer
    pub product_id: u16,
    /// Bulk out endpoint, detected when `None`
    pub endpoint: Option<u8>,
    /// Time to wait before giving up writing to the bulk endpoint
    pub write_timeout: Duration,
    /// Time to wait for a status reply
    pub read_timeout: Duration,
    pub chunk_size: usize,
    pub chunk_delay: Duration
}

impl UsbSettings {
    pub fn new(vendor_id: u16, product_id: u16) -> UsbSettings {
        UsbSettings {
            vendor_id,
            product_id,
            endpoint: None,
            write_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(1),
            chunk_size: VIRTUAL_PORT_CHUNK_SIZE,
            chunk_delay: DEFAULT_CHUNK_DELAY
        }
    }
}

/// Claimed interface, released when dropped
///
/// The kernel driver gets back the interface on release, either through libusb's auto detach or by hand when `reattach` is set.
struct UsbConnection {
    dh: DeviceHandle<Context>,
    endpoint_out: u8,
    endpoint_in: Option<u8>,
    reattach: bool
}

impl Drop for UsbConnection {
    fn drop(&mut self) {
        if let Err(e) = self.dh.release_interface(0) {
            debug!("Could not release the usb interface, {}", e);
        }
        if self.reattach {
            if let Err(e) = self.dh.attach_kernel_driver(0) {
                warn!("Could not give the interface back to the kernel driver, {}", e);
            }
        }
    }
}

// Only when libusb can not detach (and attach back) the kernel driver on its own, and the driver is bound
fn needs_manual_detach<F>(auto_detach: rusb::Result<()>, driver_active: F) -> bool
where F: FnOnce() -> rusb::Result<bool> {
    match auto_detach {
        Ok(()) => false,
        Err(e) => {
            debug!("No automatic kernel driver detach, {}", e);
            match driver_active() {
                Ok(active) => active,
                Err(e) => {
                    warn!("Could not find out if kernel driver is active, might encounter a problem soon. {}", e);
                    false
                }
            }
        }
    }
}

/// Usb printer transport
///
/// Like the serial transport, the device is opened and its interface claimed for each call only.
pub struct UsbTransport {
    settings: UsbSettings
}

impl UsbTransport {
    pub fn new(settings: UsbSettings) -> UsbTransport {
        UsbTransport {
            settings
        }
    }

    pub fn settings(&self) -> &UsbSettings {
        &self.settings
    }

    fn open(&self) -> Result<UsbConnection, Error> {
        let context = Context::new().map_err(Error::RusbError)?;
        let devices = context.devices().map_err(Error::RusbError)?;
        for device in devices.iter() {
            let s = device.device_descriptor().map_err(Error::RusbError)?;
            if s.vendor_id() != self.settings.vendor_id || s.product_id() != self.settings.product_id {
                continue;
            }
            // Before opening the device, we must find the bulk endpoints
            let config_descriptor = device.active_config_descriptor().map_err(Error::RusbError)?;
            let mut detected_out: Option<u8> = None;
            let mut detected_in: Option<u8> = None;
            for interface in config_descriptor.interfaces() {
                for descriptor in interface.descriptors() {
                    for endpoint in descriptor.endpoint_descriptors() {
                        match (endpoint.transfer_type(), endpoint.direction()) {
                            (TransferType::Bulk, Direction::Out) => if detected_out.is_none() {
                                detected_out = Some(endpoint.address());
                            },
                            (TransferType::Bulk, Direction::In) => if detected_in.is_none() {
                                detected_in = Some(endpoint.address());
                            },
                            _ => ()
                        }
                    }
                }
            }
            let endpoint_out = match self.settings.endpoint.or(detected_out) {
                Some(endpoint) => endpoint,
                None => return Err(Error::NoBulkEndpoint)
            };

            let dh = device.open().map_err(|e| match e {
                rusb::Error::Busy | rusb::Error::Access => Error::PortAlreadyOpen(self.device_name()),
                rusb::Error::NoDevice | rusb::Error::NotFound => Error::PortNotFound(self.device_name()),
                other => Error::RusbError(other)
            })?;
            let reattach = needs_manual_detach(dh.set_auto_detach_kernel_driver(true), || dh.kernel_driver_active(0));
            if reattach {
                dh.detach_kernel_driver(0).map_err(Error::RusbError)?;
            }
            // Built before claiming, so a failed claim still hands the interface back
            let connection = UsbConnection {
                dh,
                endpoint_out,
                endpoint_in: detected_in,
                reattach
            };
            connection.dh.claim_interface(0).map_err(|e| match e {
                rusb::Error::Busy => Error::PortAlreadyOpen(self.device_name()),
                other => Error::RusbError(other)
            })?;
            return Ok(connection);
        }
        // No printer was found with such vid and pid
        Err(Error::PortNotFound(self.device_name()))
    }

    fn device_name(&self) -> String {
        format!("{:04x}:{:04x}", self.settings.vendor_id, self.settings.product_id)
    }

    fn write_payload(&self, connection: &UsbConnection, payload: &[u8]) -> Result<usize, Error> {
        write_chunks(payload, self.settings.chunk_size, self.settings.chunk_delay, |chunk| {
            connection.dh.write_bulk(connection.endpoint_out, chunk, self.settings.write_timeout).map_err(Error::RusbError)
        })
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, payload: &[u8]) -> usize {
        let connection = match self.open() {
            Ok(connection) => connection,
            Err(e) => {
                warn!("Nothing sent, {}", e);
                return 0;
            }
        };
        match self.write_payload(&connection, payload) {
            Ok(written) => {
                debug!("Sent {} bytes to {}", written, self.device_name());
                written
            },
            Err(e) => {
                warn!("Write to {} failed, {}", self.device_name(), e);
                0
            }
        }
    }

    fn query(&mut self, payload: &[u8], response_length: usize) -> Vec<u8> {
        let connection = match self.open() {
            Ok(connection) => connection,
            Err(e) => {
                warn!("Nothing queried, {}", e);
                return Vec::new();
            }
        };
        let endpoint_in = match connection.endpoint_in {
            Some(endpoint) => endpoint,
            None => {
                warn!("{} has no bulk in endpoint, status can not be read", self.device_name());
                return Vec::new();
            }
        };
        if let Err(e) = self.write_payload(&connection, payload) {
            warn!("Query to {} failed, {}", self.device_name(), e);
            return Vec::new();
        }
        let mut response = vec![0u8; response_length];
        match connection.dh.read_bulk(endpoint_in, &mut response, self.settings.read_timeout) {
            Ok(read) if read == response_length => response,
            Ok(read) => {
                warn!("Expected {} bytes from {}, got {}", response_length, self.device_name(), read);
                Vec::new()
            },
            Err(e) => {
                warn!("Read from {} failed, {}", self.device_name(), e);
                Vec::new()
            }
        }
    }

    fn check_connection(&mut self) -> Result<(), Error> {
        self.open().map(|_connection| ())
    }
}
