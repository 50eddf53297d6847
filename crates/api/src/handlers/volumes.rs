//! Handlers for weekly volumes.
//!
//! Volumes are read-only over HTTP; they enter the store through seeding.

use anthology_core::error::CoreError;
use anthology_core::journal::{journal_filename, render_journal_prompt, JournalPrompt};
use anthology_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/volumes
///
/// All volumes, newest release first.
pub async fn list_volumes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let volumes = state.store.list_volumes().await?;
    Ok(Json(volumes))
}

/// GET /api/volumes/current
pub async fn get_current_volume(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let volume = state
        .store
        .get_current_volume()
        .await?
        .ok_or_else(|| CoreError::NotFound("No current volume found".into()))?;

    Ok(Json(volume))
}

/// GET /api/volumes/{id}/journal-prompt
///
/// The volume's reflection prompt as a downloadable text file.
pub async fn get_journal_prompt(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid volume id: {raw_id}")))?;

    let volume = state
        .store
        .get_volume(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Volume with id {id} not found")))?;

    let body = render_journal_prompt(&JournalPrompt {
        volume_title: &volume.title,
        prompt: &volume.reflection_prompt,
    });
    let disposition = format!(
        "attachment; filename=\"{}\"",
        journal_filename(&volume.title)
    );

    tracing::debug!(volume_id = %id, "Journal prompt rendered");

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
