use thermal_rs::{
    Printer, PrinterProfile, PrinterModel, Document, Section,
    barcode::{Code128, Itf},
    command::{FontEffects, Justification, FontWidthScalar, FontHeightScalar, Font}
};
use std::env;

fn main() {
    env_logger::init();
    let port_name = env::args().nth(1).unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let printer_profile = PrinterProfile::serial_builder(port_name, PrinterModel::Reliance).build();
    let mut printer = Printer::new(printer_profile);
    if let Err(e) = printer.check_connection() {
        panic!("Error: {}", e);
    }
    printer.reinitialize();

    let mut document = Document::new()
        + Section::text("Corner store")
            .with_effects(FontEffects::BOLD)
            .with_justification(Justification::Center)
            .with_scalars(FontWidthScalar::W2, FontHeightScalar::H2)
            .with_auto_newline(true)
        + Section::text("Milk            5.00").with_auto_newline(true)
        + Section::text("Cereal         10.00").with_auto_newline(true)
        + Section::text("Total          15.00")
            .with_effects(FontEffects::BOLD | FontEffects::UNDERLINE)
            .with_auto_newline(true)
        // Filled in below, once the ticket number is known
        + Section::placeholder()
        + Section::text("Thanks for coming!")
            .with_font(Font::FontB)
            .with_justification(Justification::Center)
            .with_auto_newline(true);
    document.replace(4, Section::barcode(Code128::new("T-000154")).with_auto_newline(true));
    document += Section::barcode(Itf::new("0123456789")).with_auto_newline(true);

    printer.print_document(&document);
    printer.form_feed();
}
