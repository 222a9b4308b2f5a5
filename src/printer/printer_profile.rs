use super::PrinterModel;
use crate::{
    Error,
    command::Codepage,
    transport::{Transport, SerialSettings, SerialTransport, UsbSettings, UsbTransport}
};
use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Available connections with the printer
///
/// Try not to use this enum directly, use the builder pattern instead (using the [serial_builder](PrinterProfile::serial_builder) or [usb_builder](PrinterProfile::usb_builder) methods).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum PrinterConnectionData {
    /// Serial port, native or virtual
    Serial(SerialSettings),
    /// Usb bulk endpoints
    Usb(UsbSettings)
}

/// Details required to connect and print
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PrinterProfile {
    /// Printer family
    pub (crate) model: PrinterModel,
    /// How to reach the printer
    pub (crate) printer_connection_data: PrinterConnectionData,
    /// Code table selected for text
    pub (crate) codepage: Codepage,
    /// Total printer width in dots, for image printing
    pub (crate) width: u16
}

impl PrinterProfile {
    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for serial printing.
    ///
    /// ```rust
    /// use thermal_rs::{PrinterProfile, PrinterModel};
    /// // Reliance defaults, 19200 bauds
    /// let printer_profile = PrinterProfile::serial_builder("/dev/ttyUSB0", PrinterModel::Reliance).build();
    /// ```
    pub fn serial_builder<A: Into<String>>(port_name: A, model: PrinterModel) -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_serial(port_name, model)
    }

    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for usb printing.
    ///
    /// ```rust
    /// use thermal_rs::{PrinterProfile, PrinterModel};
    /// let printer_profile = PrinterProfile::usb_builder(0x0425, 0x8147, PrinterModel::Phoenix).build();
    /// ```
    pub fn usb_builder(vendor_id: u16, product_id: u16, model: PrinterModel) -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_usb(vendor_id, product_id, model)
    }

    pub fn model(&self) -> PrinterModel {
        self.model
    }

    pub fn connection_data(&self) -> &PrinterConnectionData {
        &self.printer_connection_data
    }

    pub fn codepage(&self) -> Codepage {
        self.codepage
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Transport described by the profile. Nothing gets opened yet.
    pub fn transport(&self) -> Box<dyn Transport> {
        match &self.printer_connection_data {
            PrinterConnectionData::Serial(settings) => Box::new(SerialTransport::new(settings.clone())),
            PrinterConnectionData::Usb(settings) => Box::new(UsbTransport::new(settings.clone()))
        }
    }
}

/// Helper structure to create a [PrinterProfile](crate::PrinterProfile)
///
/// Builder pattern for the [PrinterProfile](crate::PrinterProfile) structure.
pub struct PrinterProfileBuilder {
    model: PrinterModel,
    printer_connection_data: PrinterConnectionData,
    codepage: Codepage,
    width: u16
}

impl PrinterProfileBuilder {
    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for serial printing
    ///
    /// The baud rate is taken from the model, timeouts default to one second, and the chunk size gets detected from the port type when first writing.
    pub fn new_serial<A: Into<String>>(port_name: A, model: PrinterModel) -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            model,
            printer_connection_data: PrinterConnectionData::Serial(SerialSettings::new(port_name, model.baud_rate())),
            codepage: Codepage::Cp437,
            width: model.dot_width()
        }
    }

    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for usb printing
    ///
    /// The bulk out endpoint is detected when opening the device, see [with_endpoint](PrinterProfileBuilder::with_endpoint) for manual setup.
    pub fn new_usb(vendor_id: u16, product_id: u16, model: PrinterModel) -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            model,
            printer_connection_data: PrinterConnectionData::Usb(UsbSettings::new(vendor_id, product_id)),
            codepage: Codepage::Cp437,
            width: model.dot_width()
        }
    }

    /// Overrides the model's baud rate (serial only)
    ///
    /// ```rust
    /// use thermal_rs::{PrinterProfileBuilder, PrinterModel};
    /// let printer_profile = PrinterProfileBuilder::new_serial("COM3", PrinterModel::Phoenix)
    ///     .with_baud_rate(19200).unwrap()
    ///     .build();
    /// assert!(PrinterProfileBuilder::new_usb(1, 1, PrinterModel::Phoenix).with_baud_rate(19200).is_err());
    /// ```
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Result<PrinterProfileBuilder, Error> {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Serial(settings) => {
                settings.baud_rate = baud_rate;
                Ok(self)
            },
            _other => Err(Error::UnsupportedForPrinterConnection)
        }
    }

    /// Sets the usb endpoint to which the data will be written (usb only)
    pub fn with_endpoint(mut self, endpoint: u8) -> Result<PrinterProfileBuilder, Error> {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Usb(settings) => {
                settings.endpoint = Some(endpoint);
                Ok(self)
            },
            _other => Err(Error::UnsupportedForPrinterConnection)
        }
    }

    /// How long a status reply may take
    pub fn with_read_timeout(mut self, timeout: Duration) -> PrinterProfileBuilder {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Serial(settings) => settings.read_timeout = timeout,
            PrinterConnectionData::Usb(settings) => settings.read_timeout = timeout
        }
        self
    }

    /// How long each chunk may take to be written
    pub fn with_write_timeout(mut self, timeout: Duration) -> PrinterProfileBuilder {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Serial(settings) => settings.write_timeout = timeout,
            PrinterConnectionData::Usb(settings) => settings.write_timeout = timeout
        }
        self
    }

    /// Fixes the write chunk size instead of detecting it
    pub fn with_chunk_size(mut self, chunk_size: usize) -> PrinterProfileBuilder {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Serial(settings) => settings.chunk_size = Some(chunk_size),
            PrinterConnectionData::Usb(settings) => settings.chunk_size = chunk_size
        }
        self
    }

    pub fn with_chunk_delay(mut self, delay: Duration) -> PrinterProfileBuilder {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Serial(settings) => settings.chunk_delay = delay,
            PrinterConnectionData::Usb(settings) => settings.chunk_delay = delay
        }
        self
    }

    pub fn with_codepage(mut self, codepage: Codepage) -> PrinterProfileBuilder {
        self.codepage = codepage;
        self
    }

    /// Adds a specific dot width for the printer (used to fit images)
    pub fn with_width(mut self, width: u16) -> PrinterProfileBuilder {
        self.width = width;
        self
    }

    /// Build the `PrinterProfile` that lies beneath the builder
    pub fn build(self) -> PrinterProfile {
        PrinterProfile {
            model: self.model,
            printer_connection_data: self.printer_connection_data,
            codepage: self.codepage,
            width: self.width
        }
    }
}
