extern crate serde;

use super::{Codepage, Font, Justification};
use serde::{Serialize, Deserialize};

/// Raw commands shared by both printer families
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Command {
    /// Equivalent to ESC @
    Init,
    /// Prints the buffer and feeds one line. Equivalent to LF
    Newline,
    /// Equivalent to FF
    FormFeed,
    /// Equivalent to ESC a
    Justify {
        justification: Justification
    },
    /// Sets up a font. Equivalent to ESC M
    SelectFont {
        font: Font
    },
    /// Selects a different code table, Equivalent to ESC t
    SelectCodeTable {
        codepage: Codepage
    },
    /// Real time status request, bypasses the print queue. Equivalent to DLE EOT
    RealTimeStatus {
        request_code: u8
    }
}

impl Command {
    /// Byte sequence of the command. No-op variants produce an empty sequence.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Command::Init => vec![0x1b, 0x40],
            Command::Newline => vec![0x0a],
            Command::FormFeed => vec![0x0c],
            Command::Justify{justification} => match justification.as_byte() {
                Some(byte) => vec![0x1b, 0x61, byte],
                None => Vec::new()
            },
            Command::SelectFont{font} => match font.as_byte() {
                Some(byte) => vec![0x1b, 0x4d, byte],
                None => Vec::new()
            },
            Command::SelectCodeTable{codepage} => vec![0x1b, 0x74, codepage.as_byte()],
            Command::RealTimeStatus{request_code} => vec![0x10, 0x04, *request_code]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn justification_bytes() {
        assert_eq!(vec![0x1b, 0x61, 0x00], Command::Justify{justification: Justification::Left}.as_bytes());
        assert_eq!(vec![0x1b, 0x61, 0x01], Command::Justify{justification: Justification::Center}.as_bytes());
        assert_eq!(vec![0x1b, 0x61, 0x02], Command::Justify{justification: Justification::Right}.as_bytes());
        assert!(Command::Justify{justification: Justification::NoOp}.as_bytes().is_empty());
    }

    #[test]
    fn no_op_font_is_empty() {
        assert!(Command::SelectFont{font: Font::NoOp}.as_bytes().is_empty());
        assert_eq!(vec![0x1b, 0x4d, 0x01], Command::SelectFont{font: Font::FontB}.as_bytes());
    }
}
