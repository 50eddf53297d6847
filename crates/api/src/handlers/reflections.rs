//! Handlers for visitor reflections.

use anthology_db::models::CreateReflection;
use anthology_events::Notification;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::notify;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/reflections
pub async fn list_reflections(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reflections = state.store.list_reflections().await?;
    Ok(Json(reflections))
}

/// POST /api/reflections
///
/// Store a reflection. `created_at` is server-set and `anonymous_sharing`
/// defaults to `false`.
pub async fn create_reflection(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateReflection>,
) -> AppResult<impl IntoResponse> {
    let reflection = state.store.create_reflection(input).await?;

    tracing::info!(
        reflection_id = %reflection.id,
        volume_id = reflection.volume_id.as_deref(),
        anonymous = reflection.anonymous_sharing,
        "Reflection created",
    );

    notify(&state, Notification::ReflectionSubmitted(reflection.clone())).await;

    Ok((StatusCode::CREATED, Json(reflection)))
}
