pub use self::printer_profile::{PrinterProfile, PrinterConnectionData, PrinterProfileBuilder};
pub use self::printer_model::PrinterModel;

mod printer_profile;
mod printer_model;

use crate::{
    Document,
    RasterImage,
    Error,
    StatusReport,
    StatusRequest,
    barcode::Barcode,
    imaging::{Algorithm, DEFAULT_THRESHOLD},
    command::{
        Command, CommandTable, Codepage, Font, FontEffects, Justification,
        FontWidthScalar, FontHeightScalar, scalar_byte
    },
    transport::Transport
};

extern crate log;

use image::DynamicImage;
use log::{debug, trace, warn};
use serde::{Serialize, Deserialize};

/// Display state the printer is believed to be in
///
/// Only changes through the [Printer](crate::Printer) mutators. After a communication failure the firmware may disagree with it, [reinitialize](Printer::reinitialize) brings both back in line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PrinterState {
    pub effects: FontEffects,
    pub justification: Justification,
    pub width: FontWidthScalar,
    pub height: FontHeightScalar,
    /// `NoOp` until a font gets selected, the firmware starts on font A
    pub font: Font
}

impl Default for PrinterState {
    fn default() -> PrinterState {
        PrinterState {
            effects: FontEffects::empty(),
            justification: Justification::Left,
            width: FontWidthScalar::W1,
            height: FontHeightScalar::H1,
            font: Font::NoOp
        }
    }
}

/// Main thermal-rs structure
///
/// The printer represents the thermal printer connected to the computer. It keeps the display state in memory, and each mutator both updates it and transmits the matching bytes. Transmission failures are swallowed by the transport, the state is updated anyway.
///
/// ```rust
/// use thermal_rs::{Printer, PrinterModel, command::{FontEffects, Justification}};
/// use thermal_rs::transport::CaptureTransport;
///
/// let mut printer = Printer::with_transport(CaptureTransport::new(), PrinterModel::Reliance);
/// printer.add_effect(FontEffects::BOLD);
/// printer.set_justification(Justification::Center);
/// printer.print_string("Hello, world!");
/// printer.print_newline();
/// assert_eq!(FontEffects::BOLD, printer.state().effects);
///
/// let transport = printer.close();
/// assert_eq!(vec![0x1b, 0x45, 0x01], transport.transactions()[0]);
/// ```
pub struct Printer<T: Transport> {
    transport: T,
    model: PrinterModel,
    /// Built for this printer, never modified
    command_table: CommandTable,
    state: PrinterState,
    codepage: Codepage,
    /// Head width in dots, pictures get fitted to it
    width: u16
}

impl Printer<Box<dyn Transport>> {
    /// Creates a new printer
    ///
    /// Creates the printer from the profile. No connection is kept alive, the transport opens the port for each operation, so this never fails. Use [check_connection](Printer::check_connection) to find out if the printer is reachable.
    ///
    /// ```rust,no_run
    /// use thermal_rs::{Printer, PrinterProfile, PrinterModel};
    ///
    /// let printer_profile = PrinterProfile::serial_builder("/dev/ttyUSB0", PrinterModel::Reliance).build();
    /// let mut printer = Printer::new(printer_profile);
    /// match printer.check_connection() {
    ///     Ok(_) => printer.print_string("Hello, world!\n"),
    ///     Err(e) => panic!("Error: {}", e)
    /// };
    /// ```
    pub fn new(printer_profile: PrinterProfile) -> Printer<Box<dyn Transport>> {
        let mut printer = Printer::with_transport(printer_profile.transport(), printer_profile.model);
        printer.codepage = printer_profile.codepage;
        printer.width = printer_profile.width;
        printer
    }
}

impl<T: Transport> Printer<T> {
    /// Creates a printer around any transport, with the model's command table
    pub fn with_transport(transport: T, model: PrinterModel) -> Printer<T> {
        Printer {
            transport,
            model,
            command_table: model.command_table(),
            state: PrinterState::default(),
            codepage: Codepage::default(),
            width: model.dot_width()
        }
    }

    /// Overrides the head width the model defaults to
    pub fn with_width(mut self, width: u16) -> Printer<T> {
        self.width = width;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn state(&self) -> &PrinterState {
        &self.state
    }

    pub fn model(&self) -> PrinterModel {
        self.model
    }

    pub fn codepage(&self) -> Codepage {
        self.codepage
    }

    pub fn command_table(&self) -> &CommandTable {
        &self.command_table
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Releases the printer, handing back the transport
    pub fn close(self) -> T {
        debug!("Closing {:?} printer", self.model);
        self.transport
    }

    fn transmit(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }
        let written = self.transport.send(bytes);
        if written != bytes.len() {
            warn!("Only {} out of {} bytes reached the printer", written, bytes.len());
        }
        written
    }

    /// Resets the state to left justified, regular size, no effects, and transmits the init sequence
    pub fn reinitialize(&mut self) {
        self.state = PrinterState::default();
        let init = self.command_table.init().to_vec();
        self.transmit(&init);
    }

    /// Enables every named effect in `effects`
    ///
    /// Combinations with unknown bits do nothing. Effects already enabled get transmitted again, the state bit is only set once.
    pub fn add_effect(&mut self, effects: FontEffects) {
        for effect in effects.decompose() {
            if let Some(bytes) = self.command_table.enable(effect).map(|bytes| bytes.to_vec()) {
                self.transmit(&bytes);
            } else {
                trace!("No enable command for {:?}", effect);
            }
            self.state.effects.insert(effect);
        }
    }

    /// Disables every named effect in `effects`
    pub fn remove_effect(&mut self, effects: FontEffects) {
        for effect in effects.decompose() {
            if let Some(bytes) = self.command_table.disable(effect).map(|bytes| bytes.to_vec()) {
                self.transmit(&bytes);
            } else {
                trace!("No disable command for {:?}", effect);
            }
            self.state.effects.remove(effect);
        }
    }

    /// Transmits every disable sequence, whatever the current state
    pub fn clear_all_effects(&mut self) {
        let disables: Vec<Vec<u8>> = self.command_table.effects().iter()
            .map(|command| command.disable.clone())
            .collect();
        for disable in disables {
            self.transmit(&disable);
        }
        self.state.effects = FontEffects::empty();
    }

    /// Sets the justification, `NoOp` does nothing
    pub fn set_justification(&mut self, justification: Justification) {
        if justification == Justification::NoOp {
            return;
        }
        let bytes = self.command_table.justification(justification);
        self.transmit(&bytes);
        self.state.justification = justification;
    }

    pub fn set_scalars(&mut self, width: FontWidthScalar, height: FontHeightScalar) {
        let bytes = self.command_table.scalars(scalar_byte(width, height));
        self.transmit(&bytes);
        self.state.width = width;
        self.state.height = height;
    }

    /// Selects the font, `NoOp` does nothing
    pub fn set_font(&mut self, font: Font) {
        if font == Font::NoOp {
            return;
        }
        self.transmit(&Command::SelectFont{font}.as_bytes());
        self.state.font = font;
    }

    /// Selects the code table, and encodes text with it from now on
    pub fn set_codepage(&mut self, codepage: Codepage) {
        self.transmit(&Command::SelectCodeTable{codepage}.as_bytes());
        self.codepage = codepage;
    }

    pub fn print_newline(&mut self) -> usize {
        let newline = self.command_table.newline().to_vec();
        self.transmit(&newline)
    }

    /// Ejects the ticket
    pub fn form_feed(&mut self) -> usize {
        let form_feed = self.command_table.form_feed().to_vec();
        self.transmit(&form_feed)
    }

    /// Prints some text, encoded with the current codepage
    ///
    /// No newline is added, see [print_newline](Printer::print_newline).
    pub fn print_string<A: AsRef<str>>(&mut self, content: A) -> usize {
        let feed = self.codepage.encode(content.as_ref());
        self.transmit(&feed)
    }

    /// Sends raw information to the printer
    ///
    /// As simple as it sounds, the state is left untouched.
    /// ```rust
    /// use thermal_rs::{Printer, PrinterModel};
    /// use thermal_rs::transport::CaptureTransport;
    ///
    /// let mut printer = Printer::with_transport(CaptureTransport::new(), PrinterModel::Phoenix);
    /// assert_eq!(2, printer.send_raw(&[0x01, 0x02]));
    /// ```
    pub fn send_raw<A: AsRef<[u8]>>(&mut self, bytes: A) -> usize {
        self.transmit(bytes.as_ref())
    }

    pub fn print_image(&mut self, image: &RasterImage) -> usize {
        self.transmit(&image.command())
    }

    /// Dithers a picture and prints it, scaled down to the head width when wider
    ///
    /// ```rust
    /// use thermal_rs::{Printer, PrinterModel, imaging::Algorithm};
    /// use thermal_rs::transport::CaptureTransport;
    /// use image::{DynamicImage, Rgba, RgbaImage};
    ///
    /// let picture = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1000, 50, Rgba([0, 0, 0, 255])));
    /// let mut printer = Printer::with_transport(CaptureTransport::new(), PrinterModel::Phoenix).with_width(200);
    /// printer.print_picture(&picture, Algorithm::Atkinson);
    /// // 200 dots are 25 bytes, the height shrinks to 10 dots
    /// assert_eq!(&[0x1d, 0x76, 0x30, 0x00, 25, 0, 10, 0], &printer.transport().bytes()[..8]);
    /// ```
    pub fn print_picture(&mut self, picture: &DynamicImage, algorithm: Algorithm) -> usize {
        let raster = RasterImage::from_image(picture, algorithm, DEFAULT_THRESHOLD, u32::from(self.width));
        self.print_image(&raster)
    }

    /// Prints a barcode, invalid input transmits nothing
    pub fn print_barcode(&mut self, barcode: &Barcode) -> usize {
        let payload = barcode.build();
        if payload.is_empty() {
            warn!("Barcode produced no payload, nothing to print");
            return 0;
        }
        self.transmit(&payload)
    }

    /// Prints every section of the document, in order
    ///
    /// Around each section the state is saved, the section's own effects, justification, scalars and font applied, the content sent, and then everything reverted. Once the document is out, the state is the same as before. A section that fails to transmit does not stop the next ones.
    pub fn print_document(&mut self, document: &Document) {
        debug!("Printing a document of {} sections", document.len());
        for (index, section) in document.iter().enumerate() {
            let snapshot = self.state;
            // Only what is not already enabled gets removed afterwards
            let added = FontEffects::from_bits_retain(section.effects.bits() & !snapshot.effects.bits());
            self.add_effect(added);
            self.set_justification(section.justification);
            if (section.width, section.height) != (snapshot.width, snapshot.height) {
                self.set_scalars(section.width, section.height);
            }
            if section.font != Font::NoOp && section.font != snapshot.font {
                self.set_font(section.font);
            }

            let content = section.content_buffer(document.codepage);
            if !content.is_empty() && self.transmit(&content) == 0 {
                warn!("Section {} could not be sent", index);
            }
            if section.auto_newline {
                self.print_newline();
            }

            self.remove_effect(added);
            if self.state.justification != snapshot.justification {
                self.set_justification(snapshot.justification);
            }
            if (self.state.width, self.state.height) != (snapshot.width, snapshot.height) {
                self.set_scalars(snapshot.width, snapshot.height);
            }
            if self.state.font != snapshot.font {
                self.restore_font(snapshot.font);
            }
        }
    }

    fn restore_font(&mut self, font: Font) {
        match font {
            // Unknown before the section, back to the power on font
            Font::NoOp => {
                self.transmit(&Command::SelectFont{font: Font::FontA}.as_bytes());
                self.state.font = Font::NoOp;
            },
            font => self.set_font(font)
        }
    }

    /// Queries a real time status
    ///
    /// A missing or short reply results in an [invalid](StatusReport::invalid) report.
    pub fn get_status(&mut self, request: StatusRequest) -> StatusReport {
        let reply = self.transport.query(&request.command(), request.response_length());
        StatusReport::decode(request, &reply)
    }

    /// Opens and releases the connection, to know if the printer is reachable
    pub fn check_connection(&mut self) -> Result<(), Error> {
        self.transport.check_connection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Section, transport::CaptureTransport};

    fn capture(model: PrinterModel) -> Printer<CaptureTransport> {
        Printer::with_transport(CaptureTransport::new(), model)
    }

    #[test]
    fn add_then_remove_restores_effects() {
        for bits in 0..=0xffu8 {
            let mut printer = capture(PrinterModel::Reliance);
            let effects = FontEffects::from_bits_retain(bits);
            printer.add_effect(effects);
            printer.remove_effect(effects);
            assert!(printer.state().effects.is_empty(), "combination {:#04x}", bits);
        }
    }

    #[test]
    fn unknown_bits_are_ignored() {
        let mut printer = capture(PrinterModel::Phoenix);
        printer.add_effect(FontEffects::from_bits_retain(0x42));
        assert!(printer.state().effects.is_empty());
        assert!(printer.transport().transactions().is_empty());
    }

    #[test]
    fn effects_go_out_one_by_one() {
        let mut printer = capture(PrinterModel::Phoenix);
        printer.add_effect(FontEffects::BOLD | FontEffects::REVERSED);
        assert_eq!(&[vec![0x1b, 0x42, 0x01], vec![0x1b, 0x45, 0x01]], printer.transport().transactions());
        assert_eq!(FontEffects::BOLD | FontEffects::REVERSED, printer.state().effects);
    }

    #[test]
    fn clear_all_effects_over_clears() {
        let mut printer = capture(PrinterModel::Reliance);
        printer.add_effect(FontEffects::UNDERLINE);
        printer.transport_mut().clear();
        printer.clear_all_effects();
        assert!(printer.state().effects.is_empty());
        assert_eq!(6, printer.transport().transactions().len());
        assert!(printer.transport().transactions().contains(&vec![0x1d, 0x42, 0x00]));
    }

    #[test]
    fn scalars_are_patched() {
        let mut printer = capture(PrinterModel::Reliance);
        printer.set_scalars(FontWidthScalar::W2, FontHeightScalar::H3);
        assert_eq!(vec![0x1d, 0x21, 0x12], printer.transport().bytes());
        assert_eq!(FontWidthScalar::W2, printer.state().width);
        assert_eq!(FontHeightScalar::H3, printer.state().height);
    }

    #[test]
    fn reinitialize_resets_state() {
        let mut printer = capture(PrinterModel::Reliance);
        printer.add_effect(FontEffects::BOLD);
        printer.set_justification(Justification::Right);
        printer.set_font(Font::FontB);
        printer.transport_mut().clear();
        printer.reinitialize();
        assert_eq!(&PrinterState::default(), printer.state());
        assert_eq!(vec![0x1b, 0x40], printer.transport().bytes());
    }

    #[test]
    fn noop_setters_send_nothing() {
        let mut printer = capture(PrinterModel::Phoenix);
        printer.set_justification(Justification::NoOp);
        printer.set_font(Font::NoOp);
        assert!(printer.transport().transactions().is_empty());
        assert_eq!(Justification::Left, printer.state().justification);
    }

    #[test]
    fn state_survives_a_dead_transport() {
        let mut printer = Printer::with_transport(CaptureTransport::disconnected(), PrinterModel::Reliance);
        printer.add_effect(FontEffects::BOLD);
        assert_eq!(0, printer.print_string("lost"));
        assert_eq!(FontEffects::BOLD, printer.state().effects);
        assert!(printer.check_connection().is_err());
    }

    #[test]
    fn document_restores_state() {
        let mut printer = capture(PrinterModel::Reliance);
        printer.add_effect(FontEffects::BOLD);
        printer.set_justification(Justification::Center);
        let before = *printer.state();

        let document = Document::new()
            + Section::text("big").with_effects(FontEffects::BOLD | FontEffects::UNDERLINE)
                .with_justification(Justification::Right)
                .with_scalars(FontWidthScalar::W2, FontHeightScalar::H2)
                .with_font(Font::FontB)
                .with_auto_newline(true)
            + Section::placeholder()
            + Section::text("plain");
        printer.print_document(&document);
        assert_eq!(&before, printer.state());
    }

    #[test]
    fn document_removes_only_what_it_added() {
        let mut printer = capture(PrinterModel::Reliance);
        printer.add_effect(FontEffects::BOLD);
        printer.transport_mut().clear();

        let document = Document::new() + Section::text("x").with_effects(FontEffects::BOLD | FontEffects::UNDERLINE);
        printer.print_document(&document);
        assert_eq!(&[
            vec![0x1b, 0x2d, 0x01],
            b"x".to_vec(),
            vec![0x1b, 0x2d, 0x00]
        ], printer.transport().transactions());
    }

    #[test]
    fn placeholder_sends_nothing() {
        let mut printer = capture(PrinterModel::Phoenix);
        printer.print_document(&(Document::new() + Section::placeholder()));
        assert!(printer.transport().transactions().is_empty());
    }

    #[test]
    fn profile_width_fits_pictures() {
        let narrow = PrinterProfile::serial_builder("COM1", PrinterModel::Reliance).with_width(100).build();
        let wide = PrinterProfile::serial_builder("COM1", PrinterModel::Reliance).with_width(2000).build();
        assert_eq!(100, Printer::new(narrow).width());
        assert_eq!(2000, Printer::new(wide).width());
        assert_eq!(640, capture(PrinterModel::Reliance).width());

        let picture = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(800, 100, image::Rgba([0, 0, 0, 255])));
        let mut printer = capture(PrinterModel::Phoenix);
        printer.print_picture(&picture, Algorithm::FloydSteinberg);
        // 384 dots wide, 48 tall
        assert_eq!(&[0x1d, 0x76, 0x30, 0x00, 48, 0, 48, 0], &printer.transport().bytes()[..8]);

        let mut printer = capture(PrinterModel::Phoenix).with_width(1000);
        printer.print_picture(&picture, Algorithm::FloydSteinberg);
        assert_eq!(&[0x1d, 0x76, 0x30, 0x00, 100, 0, 100, 0], &printer.transport().bytes()[..8]);
    }

    #[test]
    fn status_goes_through_query() {
        let mut printer = capture(PrinterModel::Reliance);
        printer.transport_mut().push_response(vec![0x00]);
        let report = printer.get_status(StatusRequest::Status);
        assert_eq!(Some(true), report.is_online);
        assert_eq!(vec![0x10, 0x04, 0x01], printer.transport().bytes());

        let report = printer.get_status(StatusRequest::FullStatus);
        assert!(report.is_invalid_report);
    }
}
