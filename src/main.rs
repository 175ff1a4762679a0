mod analysis;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::PitchsideApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let (config, errors) = DashboardConfig::from_env();
    for e in &errors {
        log::warn!("{e}; keeping the default");
    }
    log::info!("Starting with data file {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pitchside – Player Scouting",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch player photos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PitchsideApp::new(&config)))
        }),
    )
}
