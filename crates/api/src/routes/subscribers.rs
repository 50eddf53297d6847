use axum::routing::{get, post};
use axum::Router;

use crate::handlers::subscribers;
use crate::state::AppState;

/// Mailing-list routes, merged at the `/api` root.
///
/// ```text
/// POST /subscribe     -> subscribe
/// GET  /subscribers   -> list_subscribers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribers::subscribe))
        .route("/subscribers", get(subscribers::list_subscribers))
}
