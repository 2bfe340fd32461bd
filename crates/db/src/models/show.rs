//! Row model for the `shows` table.

use sqlx::FromRow;
use watchme_core::error::CoreError;
use watchme_core::show::{Show, ShowStatus, ShowType};
use watchme_core::types::{DbId, WatchDate};

/// A raw row from the `shows` table, before enum mapping.
#[derive(Debug, Clone, FromRow)]
pub struct ShowRow {
    pub id: DbId,
    pub title: String,
    #[sqlx(rename = "type")]
    pub show_type: String,
    pub status: String,
    pub rating: i32,
    pub notes: Option<String>,
    pub watched_at: WatchDate,
    pub genre: String,
    pub poster_url: String,
}

impl TryFrom<ShowRow> for Show {
    type Error = CoreError;

    /// Map stored strings onto domain enums.
    ///
    /// Legacy `"Completed"` rows read as `Finished`. Unknown types degrade to
    /// `Other`; an unknown status is an error since filters depend on it.
    fn try_from(row: ShowRow) -> Result<Self, Self::Error> {
        let show_type = ShowType::from_name(&row.show_type).unwrap_or_else(|| {
            tracing::warn!(show_id = row.id, stored = %row.show_type, "Unknown show type, reading as Other");
            ShowType::Other
        });

        let status = ShowStatus::from_stored(&row.status).ok_or_else(|| {
            CoreError::Internal(format!(
                "show {} has unrecognized status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(Show {
            id: row.id,
            title: row.title,
            show_type,
            status,
            rating: row.rating,
            notes: row.notes.unwrap_or_default(),
            watched_at: row.watched_at,
            genre: row.genre,
            poster_url: row.poster_url,
        })
    }
}
