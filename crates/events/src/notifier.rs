//! Outbound notifications for visitor submissions.
//!
//! Every accepted reflection, session request, and subscription produces a
//! [`Notification`]. A [`Notifier`] hands it to whatever delivery channel is
//! configured; [`LogNotifier`] records it in the trace log instead of sending
//! mail.

use anthology_db::models::{EmailSubscriber, Reflection, SessionRequest};
use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The delivery channel refused or dropped the message.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// A submission worth telling someone about.
#[derive(Debug, Clone)]
pub enum Notification {
    ReflectionSubmitted(Reflection),
    SessionRequested(SessionRequest),
    Subscribed(EmailSubscriber),
}

impl Notification {
    /// Stable machine-readable name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReflectionSubmitted(_) => "reflection.submitted",
            Self::SessionRequested(_) => "session_request.created",
            Self::Subscribed(_) => "subscriber.created",
        }
    }

    /// Human-readable subject line.
    pub fn subject(&self) -> String {
        match self {
            Self::ReflectionSubmitted(r) if r.anonymous_sharing => {
                "New reflection (anonymous)".to_string()
            }
            Self::ReflectionSubmitted(r) => format!("New reflection from {}", r.seeker_name),
            Self::SessionRequested(r) => format!("Session request from {}", r.name),
            Self::Subscribed(s) => format!("New subscriber: {}", s.email),
        }
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Delivery channel for [`Notification`]s.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Writes each notification to the trace log at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::info!(
            kind = notification.kind(),
            subject = %notification.subject(),
            "Notification recorded",
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
