//! Data-access layer for the `shows` table.
//!
//! Owns the connection pool, the one-time schema bootstrap, the SQL in
//! [`repositories::ShowRepo`], and the [`store::ShowStore`] seam the API
//! layer is built against.

pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Pool size used when the caller has no preference.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Table definition for `shows`. Safe to run against an existing table.
const CREATE_SHOWS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS shows (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        type VARCHAR(50) NOT NULL,
        status VARCHAR(50) NOT NULL,
        rating INT NOT NULL CHECK (rating >= 1 AND rating <= 10),
        notes TEXT,
        watched_at DATE NOT NULL,
        genre VARCHAR(100) NOT NULL,
        poster_url TEXT NOT NULL
    )";

/// Create a connection pool from a database URL.
///
/// TLS is negotiated according to the URL's `sslmode` parameter.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `shows` table if it does not exist yet.
///
/// This is a bootstrap, not a migration: an existing table is left as is.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_SHOWS_TABLE).execute(pool).await?;
    tracing::info!("Shows table ready");
    Ok(())
}
