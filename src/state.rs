use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::AnimeCatalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The pages reachable from the side navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Introduction,
    AnimeList,
    Statistics,
    Faq,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Introduction,
        Page::AnimeList,
        Page::Statistics,
        Page::Faq,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Introduction => "Introduction",
            Page::AnimeList => "Anime List",
            Page::Statistics => "Statistics",
            Page::Faq => "FAQ",
        }
    }
}

/// The full UI state, independent of rendering.
///
/// Widget values (search text, combo selections, current page) live here and
/// are passed into the filter engine explicitly on each change; the engines
/// themselves hold no state.
pub struct AppState {
    /// Loaded catalog (None until a file is loaded).
    pub catalog: Option<AnimeCatalog>,

    /// Active filter selections from the Anime List page.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Currently selected navigation page.
    pub page: Page,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            page: Page::Introduction,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog and reset filters.
    pub fn set_catalog(&mut self, catalog: AnimeCatalog) {
        self.filters = FilterState::default();
        self.visible_indices = (0..catalog.len()).collect();
        self.catalog = Some(catalog);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = filtered_indices(catalog, &self.filters);
        }
    }

    /// Reset all filter criteria back to "All" / empty search.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.refilter();
    }
}
