//! Payload validation helpers built on the `validator` crate.
//!
//! DTOs derive [`Validate`] with field rules; [`validate`] runs them and
//! folds any failures into a single [`CoreError::Validation`] message so the
//! HTTP layer can return it verbatim.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Run the derived rules on `input`.
///
/// The message lists every failing field as `field: message`, sorted by
/// field name and joined with `"; "`.
pub fn validate<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(format_errors(&errors)))
}

/// Custom rule: reject empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    if fields.is_empty() {
        return errors.to_string();
    }
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let detail = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                format!("{field}: {detail}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
