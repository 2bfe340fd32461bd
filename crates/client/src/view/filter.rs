//! Client-side filtering over the in-memory show list.

use watchme_core::show::{Show, ShowStatus, ShowType};

/// Filter criteria. Empty/unset criteria match everything; set criteria
/// are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowFilter {
    /// Case-insensitive substring of the title.
    pub search: String,
    /// Exact status. Legacy "Completed" rows already read as `Finished`.
    pub status: Option<ShowStatus>,
    /// Exact type.
    pub show_type: Option<ShowType>,
    /// Case-insensitive substring of the genre list.
    pub genre: String,
}

impl ShowFilter {
    /// Whether any criterion is set.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.status.is_some()
            || self.show_type.is_some()
            || !self.genre.trim().is_empty()
    }

    pub fn matches(&self, show: &Show) -> bool {
        contains_ignore_case(&show.title, &self.search)
            && self.status.map_or(true, |s| show.status == s)
            && self.show_type.map_or(true, |t| show.show_type == t)
            && contains_ignore_case(&show.genre, &self.genre)
    }

    /// The shows that pass this filter, in their original order.
    pub fn apply<'a>(&self, shows: &'a [Show]) -> Vec<&'a Show> {
        shows.iter().filter(|show| self.matches(show)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
