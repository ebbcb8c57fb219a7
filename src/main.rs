mod app;
mod color;
mod data;
mod state;
mod ui;

use app::DashboardApp;
use eframe::egui;

/// Fixed relative path of the source dataset, loaded once at startup.
const DATA_PATH: &str = "projects.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Market 1 CMS",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(DATA_PATH.into())))),
    )
}
