//! Choices offered by the filter dropdowns, and their icons.

use std::collections::BTreeSet;

use watchme_core::show::{Show, ShowStatus, ShowType};

/// Distinct values present in the current list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// In form order. "Completed" never appears; it reads as `Finished`.
    pub statuses: Vec<ShowStatus>,
    /// In form order.
    pub types: Vec<ShowType>,
    /// Individual genre labels, sorted and deduplicated.
    pub genres: Vec<String>,
}

impl FilterOptions {
    pub fn from_shows(shows: &[Show]) -> Self {
        let statuses = ShowStatus::ALL
            .into_iter()
            .filter(|s| shows.iter().any(|show| show.status == *s))
            .collect();

        let types = ShowType::ALL
            .into_iter()
            .filter(|t| shows.iter().any(|show| show.show_type == *t))
            .collect();

        let genres: BTreeSet<&str> = shows.iter().flat_map(|s| s.genres()).collect();

        Self {
            statuses,
            types,
            genres: genres.into_iter().map(str::to_string).collect(),
        }
    }
}

pub fn type_icon(show_type: ShowType) -> &'static str {
    match show_type {
        ShowType::Movie => "🎬",
        ShowType::TvShow => "📺",
        ShowType::Drama => "🎭",
        ShowType::Series => "📼",
        ShowType::Anime => "🌸",
        ShowType::Documentary => "🎥",
        ShowType::RealityShow => "👥",
        ShowType::Other => "🎞️",
    }
}

const GENRE_ICONS: &[(&str, &str)] = &[
    ("Action", "💥"),
    ("Adventure", "🧗"),
    ("Animation", "🧸"),
    ("Comedy", "😂"),
    ("Crime", "🔪"),
    ("Documentary", "📝"),
    ("Drama", "😢"),
    ("Fantasy", "🦄"),
    ("Horror", "👻"),
    ("Mystery", "🔍"),
    ("Romance", "❤️"),
    ("Sci-Fi", "🚀"),
    ("Thriller", "😱"),
    ("Western", "🤠"),
    ("Sports", "⚽"),
    ("Music", "🎵"),
    ("Biography", "📚"),
    ("History", "📜"),
    ("War", "🪖"),
    ("Family", "👪"),
];

/// Icon for a genre label; unknown genres get a generic mask.
pub fn genre_icon(genre: &str) -> &'static str {
    GENRE_ICONS
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, icon)| *icon)
        .unwrap_or("🎭")
}
