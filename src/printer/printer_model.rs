use super::{PrinterProfile, PrinterProfileBuilder};
use crate::{
    barcode::TwoDFlavor,
    command::CommandTable
};
use serde::{Serialize, Deserialize};

/// Printer families known to this library
///
/// Both speak the same esc/pos dialect, they differ in the reverse video command, the 2D barcode command and the serial defaults.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Hash)]
pub enum PrinterModel {
    /// Reliance kiosk printers
    Reliance,
    /// Phoenix panel mount printers
    Phoenix
}

impl Eq for PrinterModel{}

impl PrinterModel {
    /// Command table of the family, built fresh for each printer
    pub fn command_table(&self) -> CommandTable {
        match self {
            PrinterModel::Reliance => CommandTable::reliance(),
            PrinterModel::Phoenix => CommandTable::phoenix()
        }
    }

    /// Factory baud rate, framing is 8N1 for both
    pub fn baud_rate(&self) -> u32 {
        match self {
            PrinterModel::Reliance => 19200,
            PrinterModel::Phoenix => 9600
        }
    }

    /// Flavor of the 2D barcode command this family understands
    pub fn two_d_flavor(&self) -> TwoDFlavor {
        match self {
            PrinterModel::Reliance => TwoDFlavor::Reliance,
            PrinterModel::Phoenix => TwoDFlavor::Phoenix
        }
    }

    /// Head width, in dots
    pub fn dot_width(&self) -> u16 {
        match self {
            PrinterModel::Reliance => 640,
            PrinterModel::Phoenix => 384
        }
    }

    /// Builder with the family defaults, for the given serial port
    pub fn serial_builder<A: Into<String>>(&self, port_name: A) -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_serial(port_name, *self)
    }

    /// Obtain the full details of the printer, to make an easy print
    pub fn serial_profile<A: Into<String>>(&self, port_name: A) -> PrinterProfile {
        self.serial_builder(port_name).build()
    }
}
