//! Session request model, status enum, and DTOs.

use std::fmt;

use anthology_core::types::{DbId, Timestamp};
use anthology_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Follow-up state of a session request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Pending,
    Responded,
    Scheduled,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Responded => "responded",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact-form request for a private guided session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRequest {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub inner_landscape: String,
    pub session_intent: String,
    pub created_at: Timestamp,
    pub status: SessionStatus,
}

/// DTO for requesting a session. `status` is not accepted from callers.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(
        length(min = 20, message = "must be at least 20 characters"),
        custom(function = "not_blank")
    )]
    pub inner_landscape: String,
    #[validate(
        length(min = 10, message = "must be at least 10 characters"),
        custom(function = "not_blank")
    )]
    pub session_intent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SessionStatus::Scheduled).unwrap(),
            serde_json::json!("scheduled")
        );
        assert_eq!(SessionStatus::default(), SessionStatus::Pending);
        assert_eq!(SessionStatus::Responded.to_string(), "responded");
    }

    #[test]
    fn caller_supplied_status_is_ignored() {
        let dto: CreateSessionRequest = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "inner_landscape": "Quiet, a little restless lately.",
            "session_intent": "Find some stillness",
            "status": "scheduled",
            "id": "not-yours",
        }))
        .unwrap();

        assert_eq!(dto.name, "Ada");
        assert!(anthology_core::validation::validate(&dto).is_ok());
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_free_text_rules() {
        let dto = CreateSessionRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            inner_landscape: " ".repeat(25),
            session_intent: "\t".repeat(12),
        };

        let err = anthology_core::validation::validate(&dto).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("inner_landscape: must not be blank"), "{message}");
        assert!(message.contains("session_intent: must not be blank"), "{message}");
    }
}
