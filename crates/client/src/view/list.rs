//! The home screen: a snapshot of every show plus the active filter.

use watchme_core::show::Show;
use watchme_core::types::DbId;

use super::filter::ShowFilter;
use super::options::FilterOptions;
use super::stats::ShowStats;
use crate::api::ShowsGateway;

/// Message shown when the initial fetch fails.
pub const LOAD_ERROR: &str = "Failed to load shows. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Inline error message; the list renders empty.
    Failed(String),
}

/// In-memory show list. Filtering and statistics are recomputed from the
/// snapshot on every call and never touch the network.
#[derive(Debug, Clone)]
pub struct ShowList {
    shows: Vec<Show>,
    filter: ShowFilter,
    state: LoadState,
}

impl Default for ShowList {
    fn default() -> Self {
        Self {
            shows: Vec::new(),
            filter: ShowFilter::default(),
            state: LoadState::Loading,
        }
    }
}

impl ShowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list that is already loaded with `shows`.
    pub fn from_shows(shows: Vec<Show>) -> Self {
        Self {
            shows,
            filter: ShowFilter::default(),
            state: LoadState::Ready,
        }
    }

    /// Fetch every show once. On failure the snapshot is cleared and the
    /// state carries [`LOAD_ERROR`].
    pub async fn load(&mut self, gateway: &dyn ShowsGateway) {
        self.state = LoadState::Loading;
        match gateway.list_shows().await {
            Ok(shows) => {
                tracing::debug!(count = shows.len(), "Loaded shows");
                self.shows = shows;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load shows");
                self.shows.clear();
                self.state = LoadState::Failed(LOAD_ERROR.to_string());
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn get(&self, id: DbId) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }

    pub fn filter(&self) -> &ShowFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ShowFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter = ShowFilter::default();
    }

    /// Shows passing the current filter, in server order.
    pub fn visible(&self) -> Vec<&Show> {
        self.filter.apply(&self.shows)
    }

    /// Statistics over the whole snapshot, independent of the filter.
    pub fn stats(&self) -> ShowStats {
        ShowStats::compute(&self.shows)
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_shows(&self.shows)
    }

    /// e.g. "Showing 2 of 5 shows".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} shows",
            self.visible().len(),
            self.shows.len()
        )
    }

    /// Replace the entry with the same id by the server's record.
    /// Returns `false` if the id is not in the snapshot.
    pub fn apply_updated(&mut self, show: Show) -> bool {
        match self.shows.iter_mut().find(|s| s.id == show.id) {
            Some(slot) => {
                *slot = show;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`. Returns `false` if it was not present.
    pub fn apply_deleted(&mut self, id: DbId) -> bool {
        let before = self.shows.len();
        self.shows.retain(|s| s.id != id);
        self.shows.len() != before
    }
}
