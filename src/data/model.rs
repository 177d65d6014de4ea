use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// AnimeRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry (one anime).
///
/// Only `title` is guaranteed by the loader; every other column is optional
/// and absent cells are `None`. The serde renames match the header row of the
/// source CSV, so a record can be written back with `csv::Writer::serialize`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnimeRecord {
    #[serde(rename = "Title")]
    pub title: String,
    /// Raw comma-delimited genre field, e.g. `"Action, Shounen"`.
    #[serde(rename = "Genre")]
    pub genres: String,
    #[serde(rename = "Watch Status")]
    pub watch_status: Option<String>,
    /// The "Type" column: TV, Movie, OVA, …
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Release Year")]
    pub release_year: Option<i32>,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    /// Cover-art URL, rendered as an image embed in the list table.
    #[serde(rename = "Image")]
    pub image_url: Option<String>,
}

impl AnimeRecord {
    /// Individual genre tags: comma-split, trimmed, empty tags dropped.
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genres
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Whole-tag, case-insensitive genre membership test.
    ///
    /// `"Action"` matches the tag `Action` but never `Action-Adventure`;
    /// multi-word tags like `Slice of Life` are compared as one tag.
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genre_tags().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

// ---------------------------------------------------------------------------
// AnimeCatalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog with pre-computed filter option lists.
///
/// `records` keeps the source file order; the catalog is immutable for the
/// lifetime of a session, so the option lists are built once at load time.
#[derive(Debug, Clone)]
pub struct AnimeCatalog {
    /// All records (rows) in original file order.
    pub records: Vec<AnimeRecord>,
    /// Union of all genre tags, trimmed, deduplicated, sorted ascending.
    pub genre_options: Vec<String>,
    /// Distinct watch-status values in first-encountered order.
    pub status_options: Vec<String>,
    /// Whether the source schema carried a "Release Year" column.
    pub has_release_year: bool,
    /// Whether the source schema carried a "Rating" column.
    pub has_rating: bool,
}

impl AnimeCatalog {
    /// Build the option indices from the loaded records.
    pub fn from_records(records: Vec<AnimeRecord>) -> Self {
        let mut genre_set: BTreeSet<String> = BTreeSet::new();
        let mut status_options: Vec<String> = Vec::new();

        for rec in &records {
            for tag in rec.genre_tags() {
                genre_set.insert(tag.to_string());
            }
            if let Some(status) = &rec.watch_status {
                if !status_options.iter().any(|s| s == status) {
                    status_options.push(status.clone());
                }
            }
        }

        AnimeCatalog {
            records,
            genre_options: genre_set.into_iter().collect(),
            status_options,
            has_release_year: true,
            has_rating: true,
        }
    }

    /// Record which optional numeric columns were present in the source
    /// schema. Aggregations over absent columns are skipped entirely.
    pub fn with_columns(mut self, has_release_year: bool, has_rating: bool) -> Self {
        self.has_release_year = has_release_year;
        self.has_rating = has_rating;
        self
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
