//! Library for driving esc/pos thermal receipt printers with rust
//!
//! Supports the Reliance and Phoenix printer families, over serial ports (native or usb-cdc) or usb bulk endpoints. The port is opened for each operation and released right after, so a printer that gets unplugged and plugged back simply works again.
//!
//! ```rust,no_run
//! use thermal_rs::{Printer, PrinterProfile, PrinterModel};
//!
//! let printer_profile = PrinterProfile::serial_builder("/dev/ttyUSB0", PrinterModel::Reliance).build();
//! let mut printer = Printer::new(printer_profile);
//! // We print simple text
//! printer.print_string("Hello, world!");
//! printer.print_newline();
//! ```
//!
//! See the [Printer](crate::Printer) structure for the rest of the implemented functions (effects, justification, scaling, raw printing, images, barcodes, status queries).
//!
//! ## Printer Details
//!
//! The [PrinterProfile](crate::PrinterProfile) structure holds everything needed to reach the printer. The [PrinterModel](crate::PrinterModel) gives the family defaults (command table, baud rate), and the builder allows to override timeouts, chunking or the code table.
//!
//! ### Documents
//!
//! Because of the usual applications for thermal printers, the [Document](crate::Document) structure has been implemented, which allows you to define a ticket as a list of [sections](crate::Section). Each section carries its own effects, justification, scale and font. The printer applies them before printing the section, and reverts them right after, so the printer's state after a document is exactly the one it had before.
//!
//! ```rust
//! use thermal_rs::{
//!     Printer, PrinterModel, Document, Section,
//!     barcode::Code128,
//!     command::{FontEffects, Justification, FontWidthScalar, FontHeightScalar}
//! };
//! use thermal_rs::transport::CaptureTransport;
//!
//! let mut document = Document::new()
//!     + Section::text("RECEIPT")
//!         .with_effects(FontEffects::BOLD)
//!         .with_justification(Justification::Center)
//!         .with_scalars(FontWidthScalar::W2, FontHeightScalar::H2)
//!         .with_auto_newline(true)
//!     // Reserved for the logo, filled in later
//!     + Section::placeholder();
//! document += Section::barcode(Code128::new("0123456789"));
//!
//! let mut printer = Printer::with_transport(CaptureTransport::new(), PrinterModel::Reliance);
//! let before = *printer.state();
//! printer.print_document(&document);
//! assert_eq!(&before, printer.state());
//! ```
//!
//! Documents implement both Serialize, and Deserialize from [serde](https://docs.rs/serde), so it is possible to store them and recover them later. Raster images are encoded to base64 first to be utf-8 compatible.
//!
//! ### Status
//!
//! Real time status queries answer even while the printer is busy. A missing or malformed reply gives an invalid [StatusReport](crate::StatusReport) instead of an error, as an unplugged printer is a normal condition.

pub use printer::{Printer, PrinterState, PrinterProfile, PrinterProfileBuilder, PrinterModel, PrinterConnectionData};
pub use document::{Document, Section, SectionContent, RasterImage};
pub use status::{StatusReport, StatusRequest};
pub use error::{Error};

/// Contains raw esc/pos commands
pub mod command;
pub mod barcode;
pub mod imaging;
pub mod transport;

mod printer;
mod document;
mod status;
mod error;
