mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::AnimeExplorerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional catalog file to load at startup.
    let initial_catalog = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Anime Explorer",
        options,
        Box::new(|cc| {
            // Install image loaders so the table can render cover art.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AnimeExplorerApp::new(initial_catalog)))
        }),
    )
}
