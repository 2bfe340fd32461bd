//! Repository for the `shows` table.

use sqlx::PgPool;
use watchme_core::payload::NewShow;
use watchme_core::show::Show;
use watchme_core::types::DbId;

use crate::models::show::ShowRow;

/// Column list shared across queries to avoid repetition.
///
/// `id` is cast so tables created with `SERIAL` decode the same as `BIGSERIAL`.
const COLUMNS: &str =
    "id::BIGINT AS id, title, type, status, rating, notes, watched_at, genre, poster_url";

/// Provides CRUD operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// List every show, newest first.
    ///
    /// Rows whose stored values cannot be mapped are logged and left out, so
    /// one bad row does not hide the rest.
    pub async fn list(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows ORDER BY id DESC");
        let rows = sqlx::query_as::<_, ShowRow>(&query).fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                Show::try_from(row)
                    .map_err(|e| {
                        tracing::warn!(show_id = id, error = %e, "Skipping unreadable show row");
                    })
                    .ok()
            })
            .collect())
    }

    /// Find a show by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, ShowRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(into_show)
            .transpose()
    }

    /// Insert a new show, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (title, type, status, rating, notes, watched_at, genre, poster_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ShowRow>(&query)
            .bind(&input.title)
            .bind(input.show_type.as_str())
            .bind(input.status.as_str())
            .bind(input.rating)
            .bind(&input.notes)
            .bind(input.watched_at)
            .bind(&input.genre)
            .bind(&input.poster_url)
            .fetch_one(pool)
            .await?;
        into_show(row)
    }

    /// Replace every field of a show.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewShow,
    ) -> Result<Option<Show>, sqlx::Error> {
        let query = format!(
            "UPDATE shows SET
                title = $2,
                type = $3,
                status = $4,
                rating = $5,
                notes = $6,
                watched_at = $7,
                genre = $8,
                poster_url = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.show_type.as_str())
            .bind(input.status.as_str())
            .bind(input.rating)
            .bind(&input.notes)
            .bind(input.watched_at)
            .bind(&input.genre)
            .bind(&input.poster_url)
            .fetch_optional(pool)
            .await?
            .map(into_show)
            .transpose()
    }

    /// Permanently delete a show by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn into_show(row: ShowRow) -> Result<Show, sqlx::Error> {
    Show::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
