use crate::command::Codepage;
use serde::{Serialize, Deserialize};

/// Longest string a 2D barcode will carry, longer inputs get truncated
pub const MAX_TWO_D_LENGTH: usize = 154;

/// Which printer family the 2D barcode command is meant for
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum TwoDFlavor {
    Phoenix,
    Reliance
}

impl Eq for TwoDFlavor{}

/// Two dimensional barcode, generated by the printer firmware
///
/// Unlike the one dimensional codes, no preamble is sent.
///
/// ```rust
/// use thermal_rs::barcode::{TwoDBarcode, TwoDFlavor};
///
/// let payload = TwoDBarcode::new("hi", TwoDFlavor::Reliance).build();
/// assert_eq!(vec![0x0a, 0x1c, 0x7d, 0x25, 0x02, b'h', b'i', 0x0a], payload);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TwoDBarcode {
    pub encode_this: String,
    pub flavor: TwoDFlavor
}

impl TwoDBarcode {
    pub fn new<A: Into<String>>(encode_this: A, flavor: TwoDFlavor) -> TwoDBarcode {
        TwoDBarcode {
            encode_this: encode_this.into(),
            flavor
        }
    }

    pub fn build(&self) -> Vec<u8> {
        if self.encode_this.is_empty() {
            return Vec::new();
        }
        let mut data = Codepage::Ascii.encode(&self.encode_this);
        data.truncate(MAX_TWO_D_LENGTH);
        let length = data.len();

        let mut payload = Vec::new();
        match self.flavor {
            TwoDFlavor::Phoenix => {
                // The leading space is counted in the stored length
                let stored = (length + 1) as u16;
                payload.extend_from_slice(&[0x1d, 0x28, 0x6b, (stored & 0xff) as u8, (stored >> 8) as u8, 0x31, 0x50, 0x30]);
                payload.push(b' ');
                payload.append(&mut data);
                payload.extend_from_slice(&[0x1d, 0x28, 0x6b, 0x03, 0x00, 0x31, 0x51, 0x30]);
            },
            TwoDFlavor::Reliance => {
                payload.extend_from_slice(&[0x0a, 0x1c, 0x7d, 0x25, length as u8]);
                payload.append(&mut data);
                payload.push(0x0a);
            }
        }
        payload
    }
}
