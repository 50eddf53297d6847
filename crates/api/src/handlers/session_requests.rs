//! Handlers for private-session requests.

use anthology_db::models::CreateSessionRequest;
use anthology_events::Notification;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::notify;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/session-requests
pub async fn list_session_requests(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let requests = state.store.list_session_requests().await?;
    Ok(Json(requests))
}

/// POST /api/session-requests
///
/// The stored request always starts as `pending`.
pub async fn create_session_request(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let request = state.store.create_session_request(input).await?;

    tracing::info!(
        session_request_id = %request.id,
        status = %request.status,
        "Session request created"
    );

    notify(&state, Notification::SessionRequested(request.clone())).await;

    Ok((StatusCode::CREATED, Json(request)))
}
