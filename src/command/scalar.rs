extern crate serde;

use serde::{Serialize, Deserialize};

/// Character width multiplier, upper nibble of the `GS !` argument
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum FontWidthScalar {
    W1,
    W2,
    W3,
    W4,
    W5,
    W6,
    W7,
    W8
}

/// Character height multiplier, lower nibble of the `GS !` argument
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum FontHeightScalar {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    H7,
    H8
}

impl Eq for FontWidthScalar{}
impl Eq for FontHeightScalar{}

impl Default for FontWidthScalar {
    fn default() -> FontWidthScalar {
        FontWidthScalar::W1
    }
}

impl Default for FontHeightScalar {
    fn default() -> FontHeightScalar {
        FontHeightScalar::H1
    }
}

impl FontWidthScalar {
    pub fn as_byte(&self) -> u8 {
        match self {
            FontWidthScalar::W1 => 0x00,
            FontWidthScalar::W2 => 0x10,
            FontWidthScalar::W3 => 0x20,
            FontWidthScalar::W4 => 0x30,
            FontWidthScalar::W5 => 0x40,
            FontWidthScalar::W6 => 0x50,
            FontWidthScalar::W7 => 0x60,
            FontWidthScalar::W8 => 0x70
        }
    }
}

impl FontHeightScalar {
    pub fn as_byte(&self) -> u8 {
        match self {
            FontHeightScalar::H1 => 0x00,
            FontHeightScalar::H2 => 0x01,
            FontHeightScalar::H3 => 0x02,
            FontHeightScalar::H4 => 0x03,
            FontHeightScalar::H5 => 0x04,
            FontHeightScalar::H6 => 0x05,
            FontHeightScalar::H7 => 0x06,
            FontHeightScalar::H8 => 0x07
        }
    }
}

/// Combines both scalars into the single byte the printer expects
pub fn scalar_byte(width: FontWidthScalar, height: FontHeightScalar) -> u8 {
    width.as_byte() | height.as_byte()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_share_one_byte() {
        assert_eq!(0x00, scalar_byte(FontWidthScalar::W1, FontHeightScalar::H1));
        assert_eq!(0x12, scalar_byte(FontWidthScalar::W2, FontHeightScalar::H3));
        assert_eq!(0x77, scalar_byte(FontWidthScalar::W8, FontHeightScalar::H8));
    }
}
