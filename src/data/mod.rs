/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AnimeCatalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AnimeCatalog  │  Vec<AnimeRecord>, option lists
///   └──────────────┘
///        │                │
///        ▼                ▼
///   ┌──────────┐    ┌──────────┐
///   │  filter   │    │  stats    │
///   │ title/    │    │ grouped   │
///   │ genre/    │    │ counts &  │
///   │ status    │    │ averages  │
///   └──────────┘    └──────────┘
/// ```
///
/// Both engines are pure functions over the immutable catalog; the filter
/// feeds the list table, the stats feed the charts, and neither depends on
/// the other.

pub mod loader;
pub mod model;
pub mod filter;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::filter::{FilterState, filtered_indices};
    use super::loader::parse_csv;
    use super::stats::{average_rating_by_year, type_distribution, watch_status_distribution};

    const CATALOG_CSV: &str = "\
Title,Genre,Watch Status,Type,Release Year,Rating,Image
Naruto,\"Action, Shounen\",Completed,TV,2002,8.5,https://img.test/naruto.jpg
Bleach,\"Action, Supernatural\",Watching,TV,2004,8.0,
Mushishi,\"Slice of Life, Supernatural\",Completed,TV,2005,9.0,
Your Name,\"Romance, Drama\",Completed,Movie,2016,9.1,
Redline,Action-Adventure,Dropped,Movie,2009,,
";

    #[test]
    fn loaded_catalog_flows_through_both_engines() {
        let catalog = parse_csv(CATALOG_CSV.as_bytes()).unwrap();

        // Identity filter returns the whole catalog in order.
        let all = filtered_indices(&catalog, &FilterState::default());
        assert_eq!(all, vec![0, 1, 2, 3, 4]);

        // Conjunction of search and genre, and no prefix cross-match:
        // "Action" must not pick up Redline's "Action-Adventure" tag.
        let filters = FilterState {
            genre: Some("Action".to_string()),
            ..Default::default()
        };
        let action = filtered_indices(&catalog, &filters);
        assert_eq!(action, vec![0, 1]);

        // Aggregations read the full catalog, not the filtered view.
        let statuses = watch_status_distribution(&catalog);
        assert_eq!(statuses[0], ("Completed".to_string(), 3));

        let types = type_distribution(&catalog);
        assert_eq!(types[0].label, "TV");
        assert!((types[0].percent - 60.0).abs() < 1e-9);

        // Redline has no rating, so 2009 is absent from the averages.
        let years: Vec<i32> = average_rating_by_year(&catalog)
            .iter()
            .map(|yr| yr.year)
            .collect();
        assert_eq!(years, vec![2002, 2004, 2005, 2016]);
    }
}
