use eframe::egui::{ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::generate_palette;
use crate::data::model::AnimeCatalog;
use crate::data::stats::{average_rating_by_year, type_distribution, watch_status_distribution};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Statistics page – charts over the full catalog
// ---------------------------------------------------------------------------

/// Render the Statistics page: three charts computed from the complete
/// catalog, independent of the Anime List filters.
pub fn statistics_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Anime Statistics");

    let Some(catalog) = &state.catalog else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog to view statistics  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            watch_status_chart(ui, catalog);
            ui.add_space(16.0);
            type_share_chart(ui, catalog);
            ui.add_space(16.0);
            rating_by_year_chart(ui, catalog);
        });
}

/// Bar chart of record counts per watch status, most frequent first.
fn watch_status_chart(ui: &mut Ui, catalog: &AnimeCatalog) {
    let distribution = watch_status_distribution(catalog);
    if distribution.is_empty() {
        return;
    }

    ui.strong("Watch Status Distribution");

    let colors = generate_palette(distribution.len());
    let bars: Vec<Bar> = distribution
        .iter()
        .zip(&colors)
        .enumerate()
        .map(|(i, ((status, count), color))| {
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .name(status)
                .fill(*color)
        })
        .collect();

    let labels: Vec<String> = distribution.into_iter().map(|(s, _)| s).collect();

    Plot::new("watch_status_chart")
        .height(240.0)
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .element_formatter(Box::new(|bar, _| format!("{}: {}", bar.name, bar.value))),
            );
        });
}

/// Proportion chart of the Type column: one horizontal bar per type with
/// label, raw count, and share of the non-missing total.
fn type_share_chart(ui: &mut Ui, catalog: &AnimeCatalog) {
    let shares = type_distribution(catalog);
    if shares.is_empty() {
        return;
    }

    ui.strong("Type Distribution");

    let colors = generate_palette(shares.len());
    let bars: Vec<Bar> = shares
        .iter()
        .zip(&colors)
        .enumerate()
        .map(|(i, (share, color))| {
            // Highest-count type at the top.
            Bar::new((shares.len() - 1 - i) as f64, share.percent)
                .width(0.6)
                .name(format!(
                    "{}: {} ({:.1}%)",
                    share.label, share.count, share.percent
                ))
                .fill(*color)
        })
        .collect();

    let mut labels: Vec<String> = shares.into_iter().map(|s| s.label).collect();
    labels.reverse();

    Plot::new("type_share_chart")
        .height(200.0)
        .x_axis_label("Share of catalog (%)")
        .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .element_formatter(Box::new(|bar, _| bar.name.clone())),
            );
        });
}

/// Bar chart of the mean rating per release year, ascending by year.
/// Skipped entirely when the source schema lacks either column.
fn rating_by_year_chart(ui: &mut Ui, catalog: &AnimeCatalog) {
    let averages = average_rating_by_year(catalog);
    if averages.is_empty() {
        return;
    }

    ui.strong("Average Rating by Release Year");

    let bars: Vec<Bar> = averages
        .iter()
        .map(|yr| {
            Bar::new(yr.year as f64, yr.mean)
                .width(0.6)
                .name(yr.year.to_string())
        })
        .collect();

    Plot::new("rating_by_year_chart")
        .height(240.0)
        .x_axis_label("Release Year")
        .y_axis_label("Average Rating")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).element_formatter(Box::new(|bar, _| {
                // Rounded for the label only; the mean itself stays exact.
                format!("{}: {:.2}", bar.name, bar.value)
            })));
        });
}

/// Axis label for categorical bar positions: integral marks map to their
/// category name, everything else stays blank.
fn category_label(labels: &[String], value: f64) -> String {
    if (value - value.round()).abs() > 1e-6 {
        return String::new();
    }
    let idx = value.round() as i64;
    if idx < 0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integral_marks() {
        let labels = vec!["Completed".to_string(), "Watching".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Completed");
        assert_eq!(category_label(&labels, 1.0), "Watching");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 5.0), "");
    }
}
