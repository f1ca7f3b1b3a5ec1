mod app;
mod effects;
mod logging;
mod ui;

use app::InvoiceApp;

fn main() -> eframe::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([760.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Invoice Parser",
        options,
        Box::new(|cc| Ok(Box::new(InvoiceApp::new(cc)))),
    )
}
