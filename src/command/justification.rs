extern crate serde;

use serde::{Serialize, Deserialize};

/// Horizontal alignment of printed content
///
/// `NoOp` keeps whatever alignment is active, nothing is transmitted for it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Justification {
    Left,
    Center,
    Right,
    NoOp
}

impl Eq for Justification{}

impl Default for Justification {
    fn default() -> Justification {
        Justification::Left
    }
}

impl Justification {
    /// Argument of the `ESC a` command, `None` for the no-op justification
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Justification::Left => Some(0x00),
            Justification::Center => Some(0x01),
            Justification::Right => Some(0x02),
            Justification::NoOp => None
        }
    }
}
