/// Errors that this crate throws.
///
/// Printing and status operations never surface these for hardware failures (a missing printer is a normal condition for a receipt printer), they get logged and degrade to "nothing sent". They are returned by connection checks, image loading and kernel construction.
#[derive(Debug)]
pub enum Error {
    /// The serial port or usb device could not be found
    PortNotFound(String),
    /// The port exists, but someone else holds it
    PortAlreadyOpen(String),
    /// Generic failure while opening the connection
    ConnectionFailed(String),
    /// Error related to rusb
    RusbError(rusb::Error),
    /// Plain io error during a transaction
    IoError(std::io::Error),
    /// Error regarding image treatment
    ImageError(image::ImageError),
    /// A dither kernel was built with an empty matrix, an all-zero first row or a zero divisor
    InvalidKernel(String),
    /// This means no bulk endpoint could be found
    NoBulkEndpoint,
    /// Indicates that a builder method was called on the wrong printer connection
    UnsupportedForPrinterConnection
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let content = match self {
            Error::PortNotFound(port) => format!("Port {} could not be found", port),
            Error::PortAlreadyOpen(port) => format!("Port {} is already open", port),
            Error::ConnectionFailed(detail) => format!("Connection failed, {}", detail),
            Error::RusbError(e) => format!("rusb error: {}", e),
            Error::IoError(e) => format!("io error: {}", e),
            Error::ImageError(e) => format!("Image error: {}", e),
            Error::InvalidKernel(detail) => format!("Invalid dither kernel, {}", detail),
            Error::NoBulkEndpoint => "No bulk endpoint could be found".to_string(),
            Error::UnsupportedForPrinterConnection => "The called method does not work with the current printer connection".to_string()
        };
        write!(formatter, "{}", content)
    }
}

impl std::error::Error for Error{}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IoError(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Error {
        Error::ImageError(e)
    }
}
