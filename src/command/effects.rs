use bitflags::bitflags;
use serde::{Serialize, Deserialize};

bitflags! {
    /// Text effects the printers can toggle
    ///
    /// An empty set stands for "no effect". Sets with bits outside the named flags can exist (see [from_bits_retain](FontEffects::from_bits_retain)), but they [decompose](FontEffects::decompose) into nothing.
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FontEffects: u8 {
        const ITALIC = 0x01;
        const BOLD = 0x02;
        const UNDERLINE = 0x04;
        const ROTATED = 0x08;
        const REVERSED = 0x10;
        const UPSIDE_DOWN = 0x20;
    }
}

impl FontEffects {
    /// Every named flag, largest value first
    pub const DESCENDING: [FontEffects; 6] = [
        FontEffects::UPSIDE_DOWN,
        FontEffects::REVERSED,
        FontEffects::ROTATED,
        FontEffects::UNDERLINE,
        FontEffects::BOLD,
        FontEffects::ITALIC
    ];

    /// Splits a combined value into its named flags
    ///
    /// Walks the named flags from the largest to the smallest, taking each one that is fully contained in the remainder. If bits are left over once every named flag was tried, or the value is empty, nothing is returned: callers treat unrecognized combinations as a no-op.
    ///
    /// ```rust
    /// use thermal_rs::command::FontEffects;
    ///
    /// let flags = (FontEffects::BOLD | FontEffects::UNDERLINE).decompose();
    /// assert_eq!(vec![FontEffects::UNDERLINE, FontEffects::BOLD], flags);
    /// assert!(FontEffects::empty().decompose().is_empty());
    /// assert!(FontEffects::from_bits_retain(0x42).decompose().is_empty());
    /// ```
    pub fn decompose(self) -> Vec<FontEffects> {
        let mut remainder = self.bits();
        if remainder == 0 {
            return Vec::new();
        }
        let mut flags = Vec::new();
        for named in FontEffects::DESCENDING.iter() {
            if remainder & named.bits() == named.bits() {
                remainder -= named.bits();
                flags.push(*named);
            }
        }
        if remainder != 0 {
            return Vec::new();
        }
        flags
    }
}
