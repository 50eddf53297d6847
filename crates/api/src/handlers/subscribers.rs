//! Handlers for the mailing list.

use anthology_core::error::CoreError;
use anthology_db::models::CreateEmailSubscriber;
use anthology_events::Notification;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::notify;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/subscribers
pub async fn list_subscribers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let subscribers = state.store.list_email_subscribers().await?;
    Ok(Json(subscribers))
}

/// POST /api/subscribe
///
/// 409 when an active subscriber already holds the address.
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEmailSubscriber>,
) -> AppResult<impl IntoResponse> {
    let subscriber = state
        .store
        .subscribe_if_absent(input)
        .await?
        .ok_or_else(|| CoreError::Conflict("Email already subscribed".into()))?;

    tracing::info!(subscriber_id = %subscriber.id, "Email subscribed");

    notify(&state, Notification::Subscribed(subscriber.clone())).await;

    Ok((StatusCode::CREATED, Json(subscriber)))
}
