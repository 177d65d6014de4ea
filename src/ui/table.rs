use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::AnimeRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Anime List page – filtered record table
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 96.0;

/// Render the Anime List page: result count plus the filtered table.
pub fn anime_list_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Anime List");

    let Some(catalog) = &state.catalog else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog to browse titles  (File → Open…)");
        });
        return;
    };

    ui.label(format!("{} results found", state.visible_indices.len()));
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(90.0)) // Image
        .column(Column::remainder().at_least(160.0)) // Title
        .column(Column::remainder().at_least(140.0)) // Genre
        .column(Column::auto().at_least(90.0)) // Watch Status
        .column(Column::auto().at_least(60.0)) // Type
        .column(Column::auto().at_least(50.0)) // Year
        .column(Column::auto().at_least(50.0)) // Rating
        .header(22.0, |mut header| {
            for title in ["Image", "Title", "Genre", "Watch Status", "Type", "Year", "Rating"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let rec = &catalog.records[state.visible_indices[row.index()]];

                row.col(|ui| {
                    if let Some(embed) = cover_embed(rec) {
                        ui.add(embed);
                    }
                });
                row.col(|ui| {
                    ui.label(&rec.title);
                });
                row.col(|ui| {
                    ui.label(&rec.genres);
                });
                row.col(|ui| {
                    ui.label(rec.watch_status.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(rec.kind.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(rec.release_year.map(|y| y.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(rec.rating.map(|r| format!("{r:.1}")).unwrap_or_default());
                });
            });
        });
}

/// Map a record's cover-art URL to a renderable image embed.
/// Records without a URL get an empty cell rather than a broken image.
fn cover_embed(rec: &AnimeRecord) -> Option<egui::Image<'_>> {
    let url = rec.image_url.as_deref().filter(|u| !u.is_empty())?;
    Some(
        egui::Image::from_uri(url)
            .max_height(ROW_HEIGHT - 8.0)
            .rounding(4.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_embed_is_empty_for_missing_urls() {
        let rec = AnimeRecord {
            title: "Naruto".to_string(),
            ..Default::default()
        };
        assert!(cover_embed(&rec).is_none());

        let with_url = AnimeRecord {
            image_url: Some("https://img.test/naruto.jpg".to_string()),
            ..rec
        };
        assert!(cover_embed(&with_url).is_some());
    }
}
