use super::{BarcodeOptions, one_dimensional};
use serde::{Serialize, Deserialize};

/// Interleaved 2 of 5 barcode
///
/// Only non empty, even length, all digit inputs are encodable. Anything else builds an empty payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Itf {
    pub encode_this: String,
    pub options: BarcodeOptions
}

impl Itf {
    pub fn new<A: Into<String>>(encode_this: A) -> Itf {
        Itf {
            encode_this: encode_this.into(),
            options: BarcodeOptions::default()
        }
    }

    pub fn with_options(mut self, options: BarcodeOptions) -> Itf {
        self.options = options;
        self
    }

    /// Checks the input before building
    pub fn is_valid(&self) -> bool {
        !self.encode_this.is_empty()
            && self.encode_this.len() % 2 == 0
            && self.encode_this.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn build(&self) -> Vec<u8> {
        if !self.is_valid() {
            log::warn!("ITF payload {:?} is not an even run of digits, nothing to encode", self.encode_this);
            return Vec::new();
        }
        one_dimensional(&self.options, (0x05, 0x46), &[], &self.encode_this)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::BarcodeForm;

    #[test]
    fn invalid_inputs_are_empty() {
        assert!(Itf::new("").build().is_empty());
        assert!(Itf::new("12345").build().is_empty());
        assert!(Itf::new("12a4").build().is_empty());
    }

    #[test]
    fn valid_input() {
        assert_eq!(&[0x1d, 0x6b, 0x05, b'1', b'2', b'3', b'4', 0x00], &Itf::new("1234").build()[12..]);
        let form_two = Itf::new("00").with_options(BarcodeOptions {
            form: BarcodeForm::Two,
            ..BarcodeOptions::default()
        });
        assert_eq!(&[0x1d, 0x6b, 0x46, 0x02, b'0', b'0', 0x00], &form_two.build()[12..]);
    }
}
