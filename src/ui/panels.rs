use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation + filter widgets
// ---------------------------------------------------------------------------

/// Render the left panel: the page menu, and the filter widgets while the
/// Anime List page is active.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Main Menu");
    ui.separator();

    for page in Page::ALL {
        if ui
            .selectable_label(state.page == page, page.title())
            .clicked()
        {
            state.page = page;
        }
    }

    if state.page != Page::AnimeList {
        return;
    }

    ui.add_space(8.0);
    ui.heading("Filters");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No catalog loaded.");
        return;
    };

    // Clone the option lists so we can mutate state inside the widgets.
    let genre_options = catalog.genre_options.clone();
    let status_options = catalog.status_options.clone();
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Search for an anime");
            changed |= ui
                .text_edit_singleline(&mut state.filters.title_query)
                .changed();
            ui.add_space(4.0);

            ui.strong("Filter by Genre");
            changed |= all_or_one_combo(ui, "genre_filter", &mut state.filters.genre, &genre_options);
            ui.add_space(4.0);

            ui.strong("Filter by Watch Status");
            changed |= all_or_one_combo(
                ui,
                "status_filter",
                &mut state.filters.watch_status,
                &status_options,
            );
            ui.add_space(8.0);

            if ui.small_button("Clear filters").clicked() {
                state.clear_filters();
            }
        });

    if changed {
        state.refilter();
    }
}

/// A combo box offering "All" plus one entry per option; `None` is "All".
/// Returns whether the selection changed.
fn all_or_one_combo(
    ui: &mut Ui,
    id: &str,
    selection: &mut Option<String>,
    options: &[String],
) -> bool {
    let mut changed = false;
    let selected_text = selection.as_deref().unwrap_or("All").to_string();

    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(selection.is_none(), "All").clicked() {
                changed |= selection.take().is_some();
            }
            for option in options {
                let is_selected = selection.as_deref() == Some(option.as_str());
                if ui.selectable_label(is_selected, option).clicked() && !is_selected {
                    *selection = Some(option.clone());
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} titles loaded, {} visible",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

/// The Introduction landing page.
pub fn introduction_page(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.heading("Welcome to the Anime Explorer");
        ui.add_space(12.0);
        ui.label("Browse a personal anime catalog, filter it, and view statistics.");
        ui.add_space(8.0);
        ui.label("Navigate through the app using the menu on the left:");
        ui.label("• Anime List: filter and search for your favorite anime.");
        ui.label("• Statistics: charts over the whole catalog.");
        ui.label("• FAQ: answers to commonly asked questions.");
    });
}

/// The FAQ page.
pub fn faq_page(ui: &mut Ui) {
    ui.heading("Frequently Asked Questions");
    ui.add_space(8.0);

    ui.strong("How do I search for an anime?");
    ui.label("Use the search box on the Anime List page to find specific titles.");
    ui.add_space(6.0);

    ui.strong("How can I filter the anime list?");
    ui.label("Filter the list by genre or watch status using the dropdown menus.");
    ui.add_space(6.0);

    ui.strong("Why did an anime get a low rating?");
    ui.label("All ratings are subjective and based on personal preference only.");
    ui.add_space(6.0);

    ui.strong("What should I do if I encounter an issue?");
    ui.label("Open the catalog file again via File → Open…, or file an issue.");
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open anime catalog")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_catalog(state, &path);
    }
}

/// Load a catalog file into the app state, logging and surfacing failures.
pub fn load_catalog(state: &mut AppState, path: &std::path::Path) {
    match crate::data::loader::load_file(path) {
        Ok(catalog) => {
            log::info!(
                "Loaded {} titles, {} genres, {} watch statuses",
                catalog.len(),
                catalog.genre_options.len(),
                catalog.status_options.len()
            );
            state.set_catalog(catalog);
        }
        Err(e) => {
            log::error!("Failed to load catalog: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
