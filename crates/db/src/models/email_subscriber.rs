//! Email subscriber model and DTOs.

use anthology_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A mailing-list entry. `email` is unique among active subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailSubscriber {
    pub id: DbId,
    pub email: String,
    pub subscribed_at: Timestamp,
    pub is_active: bool,
}

impl EmailSubscriber {
    /// Whether this entry blocks a new subscription for `email`.
    ///
    /// Addresses compare exactly as submitted; inactive entries never block.
    pub fn blocks(&self, email: &str) -> bool {
        self.is_active && self.email == email
    }
}

/// DTO for subscribing. `subscribed_at` and `is_active` are server-set.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmailSubscriber {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}
