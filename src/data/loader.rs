use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{AnimeCatalog, AnimeRecord};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failures the loader boundary can report. Missing optional columns and
/// malformed numeric cells are *not* errors — they degrade to `None` fields
/// and skipped aggregations downstream.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Catalog has no 'Title' column")]
    MissingTitleColumn,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an anime catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `Title`, `Genre`, `Watch Status`, `Type`,
///   `Release Year`, `Rating`, `Image`; only `Title` is required
/// * `.json` – records-oriented array of objects with the same field names
pub fn load_file(path: &Path) -> Result<AnimeCatalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            parse_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        other => bail!(LoadError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a CSV catalog. Columns are located by header name; absent optional
/// columns flip the catalog's capability flags so dependent aggregations are
/// skipped rather than failed.
pub fn parse_csv<R: Read>(input: R) -> Result<AnimeCatalog> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let col = |name: &str| headers.iter().position(|h| h == name);

    let Some(title_idx) = col("Title") else {
        bail!(LoadError::MissingTitleColumn);
    };
    let genre_idx = col("Genre");
    let status_idx = col("Watch Status");
    let kind_idx = col("Type");
    let year_idx = col("Release Year");
    let rating_idx = col("Rating");
    let image_idx = col("Image");

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        records.push(AnimeRecord {
            title: cell(Some(title_idx)).unwrap_or("").to_string(),
            genres: cell(genre_idx).unwrap_or("").to_string(),
            watch_status: cell(status_idx).map(str::to_string),
            kind: cell(kind_idx).map(str::to_string),
            release_year: cell(year_idx).and_then(|s| parse_numeric(s, row_no, "Release Year")),
            rating: cell(rating_idx).and_then(|s| parse_numeric(s, row_no, "Rating")),
            image_url: cell(image_idx).map(str::to_string),
        });
    }

    Ok(AnimeCatalog::from_records(records)
        .with_columns(year_idx.is_some(), rating_idx.is_some()))
}

/// Parse a numeric cell, tolerating malformed values: the cell degrades to
/// `None` and the record is simply excluded from numeric aggregations.
fn parse_numeric<T: std::str::FromStr>(s: &str, row: usize, column: &str) -> Option<T> {
    match s.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Row {row}: '{s}' is not a valid {column}, ignoring");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Title": "Naruto",
///     "Genre": "Action, Shounen",
///     "Watch Status": "Completed",
///     "Type": "TV",
///     "Release Year": 2002,
///     "Rating": 8.5,
///     "Image": "https://…"
///   },
///   ...
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<AnimeCatalog> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    let mut saw_year = false;
    let mut saw_rating = false;

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let title = obj
            .get("Title")
            .and_then(JsonValue::as_str)
            .with_context(|| format!("Row {i}: missing 'Title'"))?;

        saw_year |= obj.contains_key("Release Year");
        saw_rating |= obj.contains_key("Rating");

        records.push(AnimeRecord {
            title: title.to_string(),
            genres: json_text(obj.get("Genre")).unwrap_or_default(),
            watch_status: json_text(obj.get("Watch Status")),
            kind: json_text(obj.get("Type")),
            release_year: json_number(obj.get("Release Year")).map(|v| v as i32),
            rating: json_number(obj.get("Rating")),
            image_url: json_text(obj.get("Image")),
        });
    }

    Ok(AnimeCatalog::from_records(records).with_columns(saw_year, saw_rating))
}

fn json_text(val: Option<&JsonValue>) -> Option<String> {
    val.and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numbers may arrive as JSON numbers or as quoted digits; anything else is a
/// malformed value and degrades to `None`.
fn json_number(val: Option<&JsonValue>) -> Option<f64> {
    match val? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
