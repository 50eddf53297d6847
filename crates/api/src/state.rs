use std::sync::Arc;

use anthology_db::AnthologyStore;
use anthology_events::Notifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every field is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Resource store, constructed once in `main`.
    pub store: Arc<dyn AnthologyStore>,
    /// Delivery channel for submission notifications.
    pub notifier: Arc<dyn Notifier>,
}
