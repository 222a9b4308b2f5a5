use super::{BarcodeOptions, one_dimensional};
use serde::{Serialize, Deserialize};

/// Code 39 barcode
///
/// ```rust
/// use thermal_rs::barcode::Code39;
///
/// let payload = Code39::new("ABC").build();
/// assert_eq!(&[0x1d, 0x6b, 0x04, b'A', b'B', b'C', 0x00], &payload[12..]);
/// assert!(Code39::new("").build().is_empty());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Code39 {
    pub encode_this: String,
    pub options: BarcodeOptions
}

impl Code39 {
    pub fn new<A: Into<String>>(encode_this: A) -> Code39 {
        Code39 {
            encode_this: encode_this.into(),
            options: BarcodeOptions::default()
        }
    }

    pub fn with_options(mut self, options: BarcodeOptions) -> Code39 {
        self.options = options;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        one_dimensional(&self.options, (0x04, 0x45), &[], &self.encode_this)
    }
}
