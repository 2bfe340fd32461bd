//! The storage seam the API layer is built against.
//!
//! Handlers receive an `Arc<dyn ShowStore>` at construction time instead of
//! reaching for a process-wide pool, so tests can run the full router over
//! [`MemoryShowStore`] without a database.

mod memory;
mod postgres;

pub use memory::MemoryShowStore;
pub use postgres::PgShowStore;

use async_trait::async_trait;
use watchme_core::payload::NewShow;
use watchme_core::show::Show;
use watchme_core::types::DbId;

/// Result type shared by all store operations.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Persistence operations for shows.
#[async_trait]
pub trait ShowStore: Send + Sync {
    /// All shows, ordered by `id` descending.
    async fn list_shows(&self) -> StoreResult<Vec<Show>>;

    /// Insert a show and return it with its assigned `id`.
    async fn create_show(&self, show: &NewShow) -> StoreResult<Show>;

    /// Replace every field of show `id`. `None` if it does not exist.
    async fn update_show(&self, id: DbId, show: &NewShow) -> StoreResult<Option<Show>>;

    /// Remove show `id`. `false` if it did not exist.
    async fn delete_show(&self, id: DbId) -> StoreResult<bool>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
