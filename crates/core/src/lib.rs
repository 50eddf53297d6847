//! Domain building blocks shared by the store and the HTTP layer.
//!
//! Nothing in this crate touches storage or HTTP: ids and timestamps,
//! the error taxonomy, payload validation, and journal-prompt rendering.

pub mod error;
pub mod journal;
pub mod types;
pub mod validation;
