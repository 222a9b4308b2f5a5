extern crate serde;
extern crate codepage_437;

use serde::{Serialize, Deserialize};
use codepage_437::{CP437_CONTROL, ToCp437};

/// Byte-to-glyph tables used to encode text
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Codepage {
    /// IBM PC code page 437, the power-on table of both printer families
    Cp437,
    /// Plain 7 bit ascii
    Ascii
}

impl Eq for Codepage{}

impl Default for Codepage {
    fn default() -> Codepage {
        Codepage::Cp437
    }
}

impl Codepage {
    /// Returns the byte representation for the `ESC t` command
    pub fn as_byte(&self) -> u8 {
        match self {
            Codepage::Cp437 => 0x00,
            Codepage::Ascii => 0x00
        }
    }

    /// Encodes a string with this codepage
    ///
    /// Characters with no representation in the table are replaced by `?`, encoding never fails.
    ///
    /// ```rust
    /// use thermal_rs::command::Codepage;
    ///
    /// assert_eq!(vec![0x80, b'a', b'?'], Codepage::Cp437.encode("Ça中"));
    /// assert_eq!(b"?a?".to_vec(), Codepage::Ascii.encode("Ça中"));
    /// ```
    pub fn encode<A: AsRef<str>>(&self, content: A) -> Vec<u8> {
        let content = content.as_ref();
        match self {
            Codepage::Cp437 => {
                content.chars().map(|c| {
                    let mut buffer = [0u8; 4];
                    let as_str: &str = c.encode_utf8(&mut buffer);
                    match as_str.to_cp437(&CP437_CONTROL) {
                        Ok(encoded) if encoded.len() == 1 => encoded[0],
                        _ => b'?'
                    }
                }).collect()
            },
            Codepage::Ascii => content.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' }).collect()
        }
    }
}
