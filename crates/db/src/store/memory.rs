use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use watchme_core::payload::NewShow;
use watchme_core::show::Show;
use watchme_core::types::DbId;

use super::{ShowStore, StoreResult};

/// In-process [`ShowStore`] with the same observable behaviour as the
/// PostgreSQL store: sequential ids starting at 1, newest-first listing,
/// full-record replacement on update.
///
/// [`set_unavailable`](Self::set_unavailable) makes every call fail the way
/// an unreachable database would.
#[derive(Default)]
pub struct MemoryShowStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Show>,
}

impl MemoryShowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing (or regaining) the database connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored shows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

fn materialize(id: DbId, show: &NewShow) -> Show {
    Show {
        id,
        title: show.title.clone(),
        show_type: show.show_type,
        status: show.status,
        rating: show.rating,
        notes: show.notes.clone(),
        watched_at: show.watched_at,
        genre: show.genre.clone(),
        poster_url: show.poster_url.clone(),
    }
}

#[async_trait]
impl ShowStore for MemoryShowStore {
    async fn list_shows(&self) -> StoreResult<Vec<Show>> {
        self.check_available()?;
        let inner = self.inner.read().await;
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn create_show(&self, show: &NewShow) -> StoreResult<Show> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let created = materialize(inner.last_id, show);
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_show(&self, id: DbId, show: &NewShow) -> StoreResult<Option<Show>> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|existing| {
            *existing = materialize(id, show);
            existing.clone()
        }))
    }

    async fn delete_show(&self, id: DbId) -> StoreResult<bool> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}
