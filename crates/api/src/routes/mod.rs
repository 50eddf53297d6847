pub mod health;
pub mod reflections;
pub mod session_requests;
pub mod subscribers;
pub mod volumes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /volumes                          list (GET)
/// /volumes/current                  current volume (GET)
/// /volumes/{id}/journal-prompt      journal prompt download (GET)
///
/// /reflections                      list, create (GET, POST)
///
/// /session-requests                 list, create (GET, POST)
///
/// /subscribe                        subscribe (POST)
/// /subscribers                      list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/volumes", volumes::router())
        .nest("/reflections", reflections::router())
        .nest("/session-requests", session_requests::router())
        .merge(subscribers::router())
}
