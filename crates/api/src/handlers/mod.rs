pub mod reflections;
pub mod session_requests;
pub mod subscribers;
pub mod volumes;

use anthology_events::Notification;

use crate::state::AppState;

/// Deliver a notification, logging (not propagating) any failure.
///
/// The entity is already stored by the time this runs, so the response
/// must not depend on delivery.
pub(crate) async fn notify(state: &AppState, notification: Notification) {
    if let Err(e) = state.notifier.notify(&notification).await {
        tracing::warn!(kind = notification.kind(), error = %e, "Notification delivery failed");
    }
}
