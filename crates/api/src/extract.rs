//! Request extractors.
//!
//! [`ValidatedJson`] deserializes a JSON body and runs its `validator`
//! rules before the handler sees it, so a bad payload never reaches the
//! store.

use anthology_core::validation::validate;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A JSON extractor that also validates the request body.
///
/// Malformed JSON, a wrong content type, or a missing required field
/// yields [`AppError::BadRequest`]; a rule violation yields
/// `CoreError::Validation`. Both map to 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        validate(&value)?;

        Ok(Self(value))
    }
}
