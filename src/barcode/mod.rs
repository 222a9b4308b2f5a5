//! Barcode payload encoders
//!
//! Every encoder is a pure function of its parameters. Invalid input (an empty string, an odd or non numeric ITF payload) produces an empty payload instead of an error, so callers must check for emptiness before transmitting. The produced bytes are opaque: they are sent verbatim.

pub use self::code39::Code39;
pub use self::code128::{Code128, Code128Mode};
pub use self::itf::Itf;
pub use self::two_d::{TwoDBarcode, TwoDFlavor, MAX_TWO_D_LENGTH};

mod code39;
mod code128;
mod itf;
mod two_d;

use crate::command::{Codepage, Font};
use serde::{Serialize, Deserialize};

/// Symbology sub-variant
///
/// Form two places an explicit length byte right after the symbology selection.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum BarcodeForm {
    One,
    Two
}

impl Eq for BarcodeForm{}

/// Where the human readable interpretation gets printed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum HriPosition {
    NotPrinted,
    Above,
    Below,
    AboveAndBelow
}

impl Eq for HriPosition{}

impl HriPosition {
    pub fn as_byte(&self) -> u8 {
        match self {
            HriPosition::NotPrinted => 0x00,
            HriPosition::Above => 0x01,
            HriPosition::Below => 0x02,
            HriPosition::AboveAndBelow => 0x03
        }
    }
}

/// Settings shared by the one dimensional symbologies
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BarcodeOptions {
    pub form: BarcodeForm,
    /// Bar height, in dots
    pub dot_height: u8,
    /// Module width, only values from 1 to 6 are sent to the printer
    pub width_multiplier: u8,
    pub hri_position: HriPosition,
    /// Font of the human readable text, anything other than `FontA` selects font B
    pub font: Font
}

impl Default for BarcodeOptions {
    fn default() -> BarcodeOptions {
        BarcodeOptions {
            form: BarcodeForm::One,
            dot_height: 0x64,
            width_multiplier: 0x02,
            hri_position: HriPosition::NotPrinted,
            font: Font::FontA
        }
    }
}

impl BarcodeOptions {
    /// Height, width, hri position and hri font commands
    pub fn preamble(&self) -> Vec<u8> {
        let mut preamble = vec![0x1d, 0x68, self.dot_height];
        if (1..=6).contains(&self.width_multiplier) {
            preamble.extend_from_slice(&[0x1d, 0x77, self.width_multiplier]);
        }
        preamble.extend_from_slice(&[0x1d, 0x48, self.hri_position.as_byte()]);
        let font = match self.font {
            Font::FontA => 0x00,
            _ => 0x01
        };
        preamble.extend_from_slice(&[0x1d, 0x66, font]);
        preamble
    }
}

/// Any of the supported symbologies
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "symbology")]
pub enum Barcode {
    Code39(Code39),
    Code128(Code128),
    Itf(Itf),
    TwoD(TwoDBarcode)
}

impl Barcode {
    /// Builds the printer payload. Empty on invalid input.
    pub fn build(&self) -> Vec<u8> {
        match self {
            Barcode::Code39(barcode) => barcode.build(),
            Barcode::Code128(barcode) => barcode.build(),
            Barcode::Itf(barcode) => barcode.build(),
            Barcode::TwoD(barcode) => barcode.build()
        }
    }
}

impl From<Code39> for Barcode {
    fn from(barcode: Code39) -> Barcode {
        Barcode::Code39(barcode)
    }
}

impl From<Code128> for Barcode {
    fn from(barcode: Code128) -> Barcode {
        Barcode::Code128(barcode)
    }
}

impl From<Itf> for Barcode {
    fn from(barcode: Itf) -> Barcode {
        Barcode::Itf(barcode)
    }
}

impl From<TwoDBarcode> for Barcode {
    fn from(barcode: TwoDBarcode) -> Barcode {
        Barcode::TwoD(barcode)
    }
}

// Assembles `preamble, GS k m, [n], marker, body, NUL` for the one dimensional codes
pub(crate) fn one_dimensional(options: &BarcodeOptions, select: (u8, u8), marker: &[u8], encode_this: &str) -> Vec<u8> {
    if encode_this.is_empty() {
        return Vec::new();
    }
    let mut body = Codepage::Ascii.encode(encode_this);
    let raw_length = if body.last() == Some(&0x00) {
        body.len() - 1
    } else {
        body.push(0x00);
        body.len() - 1
    };

    let mut payload = options.preamble();
    match options.form {
        BarcodeForm::One => payload.extend_from_slice(&[0x1d, 0x6b, select.0]),
        BarcodeForm::Two => {
            payload.extend_from_slice(&[0x1d, 0x6b, select.1]);
            payload.push(raw_length.min(u8::MAX as usize) as u8);
        }
    }
    payload.extend_from_slice(marker);
    payload.append(&mut body);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preamble() {
        assert_eq!(
            vec![0x1d, 0x68, 0x64, 0x1d, 0x77, 0x02, 0x1d, 0x48, 0x00, 0x1d, 0x66, 0x00],
            BarcodeOptions::default().preamble()
        );
    }

    #[test]
    fn out_of_range_multiplier_is_skipped() {
        let options = BarcodeOptions {
            width_multiplier: 7,
            hri_position: HriPosition::Below,
            font: Font::FontB,
            ..BarcodeOptions::default()
        };
        assert_eq!(
            vec![0x1d, 0x68, 0x64, 0x1d, 0x48, 0x02, 0x1d, 0x66, 0x01],
            options.preamble()
        );
        let options = BarcodeOptions {
            width_multiplier: 0,
            ..BarcodeOptions::default()
        };
        assert_eq!(9, options.preamble().len());
    }
}
