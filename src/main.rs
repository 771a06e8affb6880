mod app;
mod config;
mod editor;
mod export;
mod logging;
mod model;
mod render;
mod style;
mod types;

use app::ContourpadApp;
use config::AppConfig;

fn main() -> eframe::Result<()> {
    if let Err(err) = logging::init_logging() {
        eprintln!("logging disabled: {err:#}");
    }
    let config = AppConfig::load();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size())
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contourpad",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ContourpadApp::new(&config)))),
    )
}
