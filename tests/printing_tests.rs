use thermal_rs::{
    Printer, PrinterModel, Document, Section, RasterImage, StatusRequest,
    barcode::{Itf, TwoDBarcode, TwoDFlavor},
    command::{FontEffects, Justification, FontWidthScalar, FontHeightScalar, Font, Codepage},
    transport::{CaptureTransport, Transport}
};
use image::{Rgba, RgbaImage};

fn compile(model: PrinterModel, document: &Document) -> Vec<Vec<u8>> {
    let mut printer = Printer::with_transport(CaptureTransport::new(), model);
    printer.print_document(document);
    printer.close().transactions().to_vec()
}

#[test]
fn receipt_compiles_to_exact_bytes() {
    let black = RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 255]));
    let document = Document::new()
        + Section::text("Hi")
            .with_effects(FontEffects::BOLD)
            .with_justification(Justification::Center)
            .with_auto_newline(true)
        + Section::barcode(Itf::new("12"))
        + Section::image(RasterImage::from_dithered(&black))
        + Section::text("x")
            .with_scalars(FontWidthScalar::W2, FontHeightScalar::H2)
            .with_font(Font::FontB);

    let expected: Vec<Vec<u8>> = vec![
        vec![0x1b, 0x45, 0x01],
        vec![0x1b, 0x61, 0x01],
        b"Hi".to_vec(),
        vec![0x0a],
        vec![0x1b, 0x45, 0x00],
        vec![0x1b, 0x61, 0x00],

        vec![0x1b, 0x61, 0x01],
        vec![
            0x1d, 0x68, 0x64, 0x1d, 0x77, 0x02, 0x1d, 0x48, 0x00, 0x1d, 0x66, 0x00,
            0x1d, 0x6b, 0x05, b'1', b'2', 0x00
        ],
        vec![0x1b, 0x61, 0x00],

        vec![0x1d, 0x76, 0x30, 0x00, 0x01, 0x00, 0x01, 0x00, 0xff],

        vec![0x1d, 0x21, 0x11],
        vec![0x1b, 0x4d, 0x01],
        b"x".to_vec(),
        vec![0x1d, 0x21, 0x00],
        vec![0x1b, 0x4d, 0x00]
    ];
    assert_eq!(expected, compile(PrinterModel::Phoenix, &document));
}

#[test]
fn reverse_video_depends_on_the_model() {
    let document = Document::new() + Section::text("!").with_effects(FontEffects::REVERSED);
    assert_eq!(vec![0x1d, 0x42, 0x01], compile(PrinterModel::Reliance, &document)[0]);
    assert_eq!(vec![0x1b, 0x42, 0x01], compile(PrinterModel::Phoenix, &document)[0]);
}

#[test]
fn two_d_barcode_in_a_document() {
    let flavor = PrinterModel::Reliance.two_d_flavor();
    assert_eq!(TwoDFlavor::Reliance, flavor);
    let document = Document::new() + Section::barcode(TwoDBarcode::new("ABC", flavor));
    assert_eq!(vec![
        vec![0x1b, 0x61, 0x01],
        vec![0x0a, 0x1c, 0x7d, 0x25, 0x03, b'A', b'B', b'C', 0x0a],
        vec![0x1b, 0x61, 0x00]
    ], compile(PrinterModel::Reliance, &document));
}

#[test]
fn invalid_barcode_only_moves_justification() {
    let document = Document::new() + Section::barcode(Itf::new("1a"));
    assert_eq!(vec![
        vec![0x1b, 0x61, 0x01],
        vec![0x1b, 0x61, 0x00]
    ], compile(PrinterModel::Phoenix, &document));
}

#[test]
fn placeholder_can_be_filled_later() {
    let mut document = Document::new()
        + Section::text("a")
        + Section::placeholder()
        + Section::text("b");
    assert_eq!(vec![b"a".to_vec(), b"b".to_vec()], compile(PrinterModel::Phoenix, &document));

    document.replace(1, Section::text("-"));
    assert_eq!(vec![b"a".to_vec(), b"-".to_vec(), b"b".to_vec()], compile(PrinterModel::Phoenix, &document));
}

#[test]
fn document_codepage_is_used_for_text() {
    let document = Document::new().with_codepage(Codepage::Ascii) + Section::text("año");
    assert_eq!(vec![b"a?o".to_vec()], compile(PrinterModel::Reliance, &document));
}

#[test]
fn stored_document_prints_the_same() {
    let black = RgbaImage::from_pixel(10, 3, Rgba([0, 0, 0, 255]));
    let document = Document::new()
        + Section::text("Stored")
            .with_effects(FontEffects::UNDERLINE | FontEffects::ITALIC)
            .with_auto_newline(true)
        + Section::image(RasterImage::from_dithered(&black))
        + Section::placeholder();
    let content = serde_json::to_string(&document).unwrap();
    let restored: Document = serde_json::from_str(&content).unwrap();
    assert_eq!(document, restored);
    assert_eq!(compile(PrinterModel::Phoenix, &document), compile(PrinterModel::Phoenix, &restored));
}

#[test]
fn failed_sections_do_not_stop_the_document() {
    let mut printer = Printer::with_transport(CaptureTransport::disconnected(), PrinterModel::Reliance);
    let before = *printer.state();
    let document = Document::new()
        + Section::text("lost").with_effects(FontEffects::BOLD).with_justification(Justification::Right)
        + Section::text("lost too").with_scalars(FontWidthScalar::W3, FontHeightScalar::H3);
    printer.print_document(&document);
    assert_eq!(&before, printer.state());
    assert!(printer.transport().transactions().is_empty());
}

#[test]
fn boxed_transport_works_as_any_other() {
    let mut transport = CaptureTransport::new();
    transport.push_response(vec![0x12, 0x00, 0x00, 0x00, 0x00, 0x00]);
    let boxed: Box<dyn Transport> = Box::new(transport);
    let mut printer = Printer::with_transport(boxed, PrinterModel::Phoenix);

    let report = printer.get_status(StatusRequest::FullStatus);
    assert!(!report.is_invalid_report);
    assert_eq!(Some(true), report.is_paper_present);
    assert_eq!(Some(true), report.is_cutter_okay);
    assert!(printer.check_connection().is_ok());
}
