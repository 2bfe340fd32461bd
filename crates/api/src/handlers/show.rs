//! Handlers for the `/shows` resource.
//!
//! Create and update share one validation path: every required field must
//! be present, and `notes` / `poster_url` fall back to their defaults.
//! Path ids are parsed by hand so that `0`, negatives, and non-numbers are
//! all answered with the same 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use watchme_core::error::CoreError;
use watchme_core::payload::ShowPayload;
use watchme_core::show::{parse_show_id, Show};
use watchme_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// GET /api/shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Show>>> {
    let shows = state.store.list_shows().await?;
    Ok(Json(shows))
}

/// POST /api/shows
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ShowPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Show>)> {
    let Json(payload) = body?;
    let input = payload.into_new_show(&state.config.placeholder_poster_url)?;

    let show = state.store.create_show(&input).await?;
    tracing::info!(show_id = show.id, title = %show.title, "Show created");

    Ok((StatusCode::CREATED, Json(show)))
}

/// PUT /api/shows/{id}
///
/// Replaces every field; there is no partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<ShowPayload>, JsonRejection>,
) -> AppResult<Json<Show>> {
    let id = parse_show_id(&raw_id)?;
    let Json(payload) = body?;
    let input = payload.into_new_show(&state.config.placeholder_poster_url)?;

    let show = state
        .store
        .update_show(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    tracing::info!(show_id = id, "Show updated");

    Ok(Json(show))
}

/// DELETE /api/shows/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_show_id(&raw_id)?;

    let deleted = state.store.delete_show(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Show", id }));
    }
    tracing::info!(show_id = id, "Show deleted");

    Ok(Json(DeleteResponse {
        message: "Show deleted successfully",
        id,
    }))
}
