extern crate serde;

use serde::{Serialize, Deserialize};

/// Resident fonts of the thermal printers
///
/// `NoOp` leaves the active font untouched, no command gets sent for it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq)]
pub enum Font {
    FontA,
    FontB,
    FontC,
    NoOp
}

impl Eq for Font{}

impl Default for Font {
    fn default() -> Font {
        Font::NoOp
    }
}

impl Font {
    /// Byte representation of each font, `None` for the no-op font.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Font::FontA => Some(0x00),
            Font::FontB => Some(0x01),
            Font::FontC => Some(0x02),
            Font::NoOp => None
        }
    }
}
