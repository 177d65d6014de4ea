use super::model::AnimeCatalog;

// ---------------------------------------------------------------------------
// Filter criteria: free-text title search + genre + watch status
// ---------------------------------------------------------------------------

/// The active filter selections, threaded in from the UI on every frame.
/// `None` for genre / watch status is the "All" sentinel of the combo boxes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring match on the title; empty matches all.
    pub title_query: String,
    /// Whole-tag match against the comma-split genre list.
    pub genre: Option<String>,
    /// Exact watch-status equality.
    pub watch_status: Option<String>,
}

impl FilterState {
    /// Whether any criterion is active.
    pub fn is_active(&self) -> bool {
        !self.title_query.is_empty() || self.genre.is_some() || self.watch_status.is_some()
    }
}

/// Return indices of records that pass all active filters.
///
/// The three criteria are conjunctive. A record missing the field a concrete
/// filter refers to never matches that criterion. The result preserves the
/// catalog's original record order; zero matches yields an empty vec.
pub fn filtered_indices(catalog: &AnimeCatalog, filters: &FilterState) -> Vec<usize> {
    let query = filters.title_query.trim().to_lowercase();

    catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if !query.is_empty() && !rec.title.to_lowercase().contains(&query) {
                return false;
            }
            if let Some(genre) = &filters.genre {
                if !rec.has_genre(genre) {
                    return false;
                }
            }
            if let Some(status) = &filters.watch_status {
                match &rec.watch_status {
                    Some(s) if s == status => {}
                    _ => return false,
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AnimeRecord;

    fn sample_catalog() -> AnimeCatalog {
        AnimeCatalog::from_records(vec![
            AnimeRecord {
                title: "Naruto".to_string(),
                genres: "Action, Shounen".to_string(),
                watch_status: Some("Completed".to_string()),
                ..Default::default()
            },
            AnimeRecord {
                title: "Bleach".to_string(),
                genres: "Action, Supernatural".to_string(),
                watch_status: Some("Watching".to_string()),
                ..Default::default()
            },
            AnimeRecord {
                title: "Mushishi".to_string(),
                genres: "Slice of Life, Supernatural".to_string(),
                watch_status: None,
                ..Default::default()
            },
        ])
    }

    fn titles(catalog: &AnimeCatalog, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| catalog.records[i].title.clone())
            .collect()
    }

    #[test]
    fn empty_criteria_match_everything_in_order() {
        let catalog = sample_catalog();
        let indices = filtered_indices(&catalog, &FilterState::default());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn title_search_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let filters = FilterState {
            title_query: "naru".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&catalog, &filtered_indices(&catalog, &filters)), ["Naruto"]);
    }

    #[test]
    fn genre_filter_selects_whole_tags() {
        let catalog = sample_catalog();
        let filters = FilterState {
            genre: Some("Shounen".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&catalog, &filtered_indices(&catalog, &filters)), ["Naruto"]);
    }

    #[test]
    fn genre_prefix_does_not_cross_match() {
        let catalog = AnimeCatalog::from_records(vec![AnimeRecord {
            title: "Dungeon Crawl".to_string(),
            genres: "Action-Adventure".to_string(),
            ..Default::default()
        }]);
        let filters = FilterState {
            genre: Some("Action".to_string()),
            ..Default::default()
        };
        assert!(filtered_indices(&catalog, &filters).is_empty());
    }

    #[test]
    fn multi_word_genre_matches_as_one_tag() {
        let catalog = sample_catalog();
        let filters = FilterState {
            genre: Some("Slice of Life".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&catalog, &filtered_indices(&catalog, &filters)), ["Mushishi"]);
    }

    #[test]
    fn missing_status_never_matches_a_concrete_filter() {
        let catalog = sample_catalog();
        let filters = FilterState {
            watch_status: Some("Watching".to_string()),
            ..Default::default()
        };
        // Mushishi has no status; only Bleach matches.
        assert_eq!(titles(&catalog, &filtered_indices(&catalog, &filters)), ["Bleach"]);
    }

    #[test]
    fn criteria_are_conjunctive() {
        let catalog = sample_catalog();
        let filters = FilterState {
            title_query: "b".to_string(),
            genre: Some("Supernatural".to_string()),
            watch_status: Some("Watching".to_string()),
        };
        assert_eq!(titles(&catalog, &filtered_indices(&catalog, &filters)), ["Bleach"]);

        let none = FilterState {
            watch_status: Some("Completed".to_string()),
            ..filters
        };
        assert!(filtered_indices(&catalog, &none).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let catalog = AnimeCatalog::from_records(Vec::new());
        let filters = FilterState {
            title_query: "anything".to_string(),
            ..Default::default()
        };
        assert!(filtered_indices(&catalog, &filters).is_empty());
    }
}
