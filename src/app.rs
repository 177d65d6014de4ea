use std::path::PathBuf;

use eframe::egui;

use crate::state::{AppState, Page};
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AnimeExplorerApp {
    pub state: AppState,
}

impl AnimeExplorerApp {
    /// Create the app, optionally loading a catalog passed on the command
    /// line so the explorer starts populated like the original fixed-file UI.
    pub fn new(initial_catalog: Option<PathBuf>) -> Self {
        let mut state = AppState::default();
        if let Some(path) = initial_catalog {
            panels::load_catalog(&mut state, &path);
        }
        Self { state }
    }
}

impl eframe::App for AnimeExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation + filters ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Introduction => panels::introduction_page(ui),
            Page::AnimeList => table::anime_list_page(ui, &self.state),
            Page::Statistics => charts::statistics_page(ui, &self.state),
            Page::Faq => panels::faq_page(ui),
        });
    }
}
