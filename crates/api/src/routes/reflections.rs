use axum::routing::get;
use axum::Router;

use crate::handlers::reflections;
use crate::state::AppState;

/// Reflection routes mounted at `/reflections`.
///
/// ```text
/// GET  /   -> list_reflections
/// POST /   -> create_reflection
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(reflections::list_reflections).post(reflections::create_reflection),
    )
}
