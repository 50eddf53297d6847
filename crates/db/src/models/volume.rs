//! Volume model and DTOs.

use anthology_core::types::{DbId, Timestamp};
use anthology_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A published content unit: poem, reflection prompt, optional soundscape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volume {
    pub id: DbId,
    pub title: String,
    pub volume_number: i32,
    pub poem_content: String,
    pub reflection_prompt: String,
    pub soundscape_url: Option<String>,
    pub soundscape_title: Option<String>,
    pub release_date: Timestamp,
    pub is_current: bool,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a volume.
///
/// `release_date` defaults to the creation time and `is_current` to `false`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVolume {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub volume_number: i32,
    #[validate(custom(function = "not_blank"))]
    pub poem_content: String,
    #[validate(custom(function = "not_blank"))]
    pub reflection_prompt: String,
    #[validate(url(message = "must be a valid URL"))]
    pub soundscape_url: Option<String>,
    pub soundscape_title: Option<String>,
    pub release_date: Option<Timestamp>,
    pub is_current: Option<bool>,
}
