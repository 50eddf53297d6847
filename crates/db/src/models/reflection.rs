//! Reflection model and DTOs.

use anthology_core::types::{DbId, Timestamp};
use anthology_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A visitor's free-text reflection, optionally tied to a volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reflection {
    pub id: DbId,
    pub seeker_name: String,
    /// Weak reference to [`Volume::id`](super::volume::Volume); never checked.
    pub volume_id: Option<String>,
    pub reflection_content: String,
    pub anonymous_sharing: bool,
    pub created_at: Timestamp,
}

/// DTO for submitting a reflection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReflection {
    #[validate(custom(function = "not_blank"))]
    pub seeker_name: String,
    pub volume_id: Option<String>,
    #[validate(
        length(min = 10, message = "must be at least 10 characters"),
        custom(function = "not_blank")
    )]
    pub reflection_content: String,
    pub anonymous_sharing: Option<bool>,
}
