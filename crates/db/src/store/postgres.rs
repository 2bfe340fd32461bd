use async_trait::async_trait;
use watchme_core::payload::NewShow;
use watchme_core::show::Show;
use watchme_core::types::DbId;

use super::{ShowStore, StoreResult};
use crate::repositories::ShowRepo;
use crate::DbPool;

/// [`ShowStore`] backed by the PostgreSQL pool.
#[derive(Clone)]
pub struct PgShowStore {
    pool: DbPool,
}

impl PgShowStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ShowStore for PgShowStore {
    async fn list_shows(&self) -> StoreResult<Vec<Show>> {
        ShowRepo::list(&self.pool).await
    }

    async fn create_show(&self, show: &NewShow) -> StoreResult<Show> {
        ShowRepo::create(&self.pool, show).await
    }

    async fn update_show(&self, id: DbId, show: &NewShow) -> StoreResult<Option<Show>> {
        ShowRepo::update(&self.pool, id, show).await
    }

    async fn delete_show(&self, id: DbId) -> StoreResult<bool> {
        ShowRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}
