use axum::routing::get;
use axum::Router;

use crate::handlers::session_requests;
use crate::state::AppState;

/// Session request routes mounted at `/session-requests`.
///
/// ```text
/// GET  /   -> list_session_requests
/// POST /   -> create_session_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(session_requests::list_session_requests)
            .post(session_requests::create_session_request),
    )
}
