mod app;
mod style;
mod subscription;
mod view;

use app::FolioApp;
use eframe::egui;
use folio::config::Config;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let log_dir = Config::data_dir().map(|dir| dir.join("logs"));
    folio::logging::init_tracing(&config.logging.level, log_dir.as_deref());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }

    // Optional starting folder as the only argument
    let start_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("File Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(&cc.egui_ctx, config, start_path)))),
    )
}
