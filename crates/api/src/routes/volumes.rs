use axum::routing::get;
use axum::Router;

use crate::handlers::volumes;
use crate::state::AppState;

/// Volume routes mounted at `/volumes`.
///
/// ```text
/// GET /                      -> list_volumes
/// GET /current               -> get_current_volume
/// GET /{id}/journal-prompt   -> get_journal_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(volumes::list_volumes))
        .route("/current", get(volumes::get_current_volume))
        .route("/{id}/journal-prompt", get(volumes::get_journal_prompt))
}
