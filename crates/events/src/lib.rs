//! Notification plumbing for visitor submissions.
//!
//! - [`Notification`]: what happened, carrying a copy of the stored entity.
//! - [`Notifier`]: the delivery seam the HTTP layer calls after a create.
//! - [`LogNotifier`]: the default channel, which only logs.

pub mod notifier;

pub use notifier::{LogNotifier, Notification, Notifier, NotifyError};
