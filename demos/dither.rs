use thermal_rs::{
    Printer, PrinterModel, RasterImage,
    imaging::{self, Algorithm, DEFAULT_THRESHOLD}
};
use thermal_rs::transport::CaptureTransport;
use std::env;

/// Dithers a picture with every algorithm, saving each result next to it
fn main() {
    env_logger::init();
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => panic!("Usage: dither <picture>")
    };
    let picture = match image::open(&path) {
        Ok(picture) => imaging::fit_width(&picture.to_rgba8(), u32::from(PrinterModel::Phoenix.dot_width())),
        Err(e) => panic!("Error: {}", e)
    };

    let mut printer = Printer::with_transport(CaptureTransport::new(), PrinterModel::Phoenix);
    for algorithm in Algorithm::all().iter() {
        let dithered = imaging::generate_dithered(&picture, *algorithm, DEFAULT_THRESHOLD);
        let target = format!("{}.{:?}.png", path, algorithm);
        if let Err(e) = dithered.save(&target) {
            println!("Error: {}", e);
            continue;
        }
        let raster = RasterImage::from_dithered(&dithered);
        let sent = printer.print_image(&raster);
        println!("{:?}: {} bytes of raster, saved to {}", algorithm, sent, target);
    }
}
