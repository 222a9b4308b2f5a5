use super::{BarcodeOptions, one_dimensional};
use serde::{Serialize, Deserialize};

/// Code set the barcode starts with
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Code128Mode {
    A,
    B,
    C
}

impl Eq for Code128Mode{}

impl Code128Mode {
    /// Two byte code set marker, `{` followed by the set letter
    pub fn marker(&self) -> [u8; 2] {
        match self {
            Code128Mode::A => [0x7b, 0x41],
            Code128Mode::B => [0x7b, 0x42],
            Code128Mode::C => [0x7b, 0x43]
        }
    }
}

/// Code 128 barcode
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Code128 {
    pub encode_this: String,
    pub mode: Code128Mode,
    pub options: BarcodeOptions
}

impl Code128 {
    pub fn new<A: Into<String>>(encode_this: A) -> Code128 {
        Code128 {
            encode_this: encode_this.into(),
            mode: Code128Mode::A,
            options: BarcodeOptions::default()
        }
    }

    pub fn with_mode(mut self, mode: Code128Mode) -> Code128 {
        self.mode = mode;
        self
    }

    pub fn with_options(mut self, options: BarcodeOptions) -> Code128 {
        self.options = options;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        one_dimensional(&self.options, (0x08, 0x49), &self.mode.marker(), &self.encode_this)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::BarcodeForm;

    #[test]
    fn default_payload() {
        let text = "AbC1234567890!";
        let mut expected = vec![
            0x1d, 0x68, 0x64,
            0x1d, 0x77, 0x02,
            0x1d, 0x48, 0x00,
            0x1d, 0x66, 0x00,
            0x1d, 0x6b, 0x08,
            0x7b, 0x41
        ];
        expected.extend_from_slice(text.as_bytes());
        expected.push(0x00);
        assert_eq!(expected, Code128::new(text).build());
    }

    #[test]
    fn form_two_mode_c() {
        let barcode = Code128::new("1234")
            .with_mode(Code128Mode::C)
            .with_options(BarcodeOptions {
                form: BarcodeForm::Two,
                ..BarcodeOptions::default()
            });
        assert_eq!(
            &[0x1d, 0x6b, 0x49, 0x04, 0x7b, 0x43, b'1', b'2', b'3', b'4', 0x00],
            &barcode.build()[12..]
        );
    }

    #[test]
    fn empty_input() {
        assert!(Code128::new("").with_mode(Code128Mode::B).build().is_empty());
    }
}
