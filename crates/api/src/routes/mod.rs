pub mod health;
pub mod show;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /shows          list, create
/// /shows/{id}     update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/shows", show::router())
}
