//! The show entity and its enumerated fields.
//!
//! `type` and `status` travel as display strings ("TV Show", "Plan to Watch")
//! both on the wire and in the `shows` table. The lookup tables below are the
//! single place those strings are mapped to variants, including the legacy
//! `"Completed"` status that older rows still carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, WatchDate};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Poster used when a show is saved without one.
pub const DEFAULT_POSTER_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// Lowest accepted rating (inclusive).
pub const RATING_MIN: i32 = 1;

/// Highest accepted rating (inclusive). Matches the `shows.rating` CHECK constraint.
pub const RATING_MAX: i32 = 10;

// ---------------------------------------------------------------------------
// ShowType
// ---------------------------------------------------------------------------

/// Kind of media a show entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ShowType {
    Movie,
    TvShow,
    Drama,
    Series,
    Anime,
    Documentary,
    RealityShow,
    Other,
}

const TYPE_NAMES: &[(&str, ShowType)] = &[
    ("Movie", ShowType::Movie),
    ("TV Show", ShowType::TvShow),
    ("Drama", ShowType::Drama),
    ("Series", ShowType::Series),
    ("Anime", ShowType::Anime),
    ("Documentary", ShowType::Documentary),
    ("Reality Show", ShowType::RealityShow),
    ("Other", ShowType::Other),
];

impl ShowType {
    /// All types, in the order forms present them.
    pub const ALL: [ShowType; 8] = [
        ShowType::Movie,
        ShowType::TvShow,
        ShowType::Drama,
        ShowType::Series,
        ShowType::Anime,
        ShowType::Documentary,
        ShowType::RealityShow,
        ShowType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        TYPE_NAMES
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(name, _)| *name)
            .unwrap_or("Other")
    }

    /// Look up a type by its display name. Exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        TYPE_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, t)| *t)
    }
}

impl FromStr for ShowType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid type '{s}'. Must be one of: {:?}",
                TYPE_NAMES.iter().map(|(n, _)| *n).collect::<Vec<_>>()
            ))
        })
    }
}

impl TryFrom<String> for ShowType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShowType> for &'static str {
    fn from(value: ShowType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for ShowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShowStatus
// ---------------------------------------------------------------------------

/// Viewing progress for a show entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ShowStatus {
    Finished,
    Watching,
    PlanToWatch,
    OnHold,
    Dropped,
}

/// Canonical status names. The first entry for a variant is the one written out.
const STATUS_NAMES: &[(&str, ShowStatus)] = &[
    ("Finished", ShowStatus::Finished),
    ("Watching", ShowStatus::Watching),
    ("Plan to Watch", ShowStatus::PlanToWatch),
    ("On Hold", ShowStatus::OnHold),
    ("Dropped", ShowStatus::Dropped),
    // Legacy synonym still present in older rows.
    ("Completed", ShowStatus::Finished),
];

impl ShowStatus {
    /// All statuses, in the order forms present them. Excludes legacy synonyms.
    pub const ALL: [ShowStatus; 5] = [
        ShowStatus::Finished,
        ShowStatus::Watching,
        ShowStatus::PlanToWatch,
        ShowStatus::OnHold,
        ShowStatus::Dropped,
    ];

    pub fn as_str(self) -> &'static str {
        STATUS_NAMES
            .iter()
            .find(|(_, s)| *s == self)
            .map(|(name, _)| *name)
            .unwrap_or("Finished")
    }

    /// Map a stored or submitted status string to its variant.
    ///
    /// Accepts the legacy `"Completed"` as [`ShowStatus::Finished`].
    pub fn from_stored(name: &str) -> Option<Self> {
        STATUS_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, s)| *s)
    }

    pub fn is_finished(self) -> bool {
        self == ShowStatus::Finished
    }
}

impl FromStr for ShowStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stored(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid status '{s}'. Must be one of: {:?}",
                ShowStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>()
            ))
        })
    }
}

impl TryFrom<String> for ShowStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShowStatus> for &'static str {
    fn from(value: ShowStatus) -> Self {
        value.as_str()
    }
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// A single watchlist entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub show_type: ShowType,
    pub status: ShowStatus,
    pub rating: i32,
    #[serde(default)]
    pub notes: String,
    pub watched_at: WatchDate,
    pub genre: String,
    pub poster_url: String,
}

impl Show {
    /// The individual genre labels, trimmed, with empty segments dropped.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_genres(&self.genre)
    }
}

/// Split a comma-separated genre list into trimmed, non-empty labels.
pub fn split_genres(genre: &str) -> impl Iterator<Item = &str> {
    genre.split(',').map(str::trim).filter(|g| !g.is_empty())
}

/// Parse a show id taken from a URL path segment.
///
/// Only positive integers are accepted.
pub fn parse_show_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation("Invalid ID format".to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
