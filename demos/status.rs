use thermal_rs::{Printer, PrinterProfile, PrinterModel, StatusRequest};
use std::env;

fn main() {
    env_logger::init();
    let port_name = env::args().nth(1).unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let printer_profile = PrinterProfile::serial_builder(port_name, PrinterModel::Phoenix).build();
    let mut printer = Printer::new(printer_profile);

    for request in vec![
        StatusRequest::Status,
        StatusRequest::OffLineStatus,
        StatusRequest::ErrorStatus,
        StatusRequest::PaperRollStatus,
        StatusRequest::PrintStatus,
        StatusRequest::FullStatus
    ] {
        let report = printer.get_status(request);
        match serde_json::to_string(&report) {
            Ok(content) => println!("{:?}: {}", request, content),
            Err(e) => println!("Error: {}", e)
        }
    }
}
