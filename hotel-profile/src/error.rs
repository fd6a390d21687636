//! Typed domain errors
//!
//! Most of the crate works in `anyhow::Result`; these are the failures callers
//! may want to match on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Hotel with ID {0} not found")]
    HotelNotFound(i64),

    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("{field} {reason}")]
    InvalidField { field: &'static str, reason: &'static str },

    #[error("unknown status: {0}")]
    UnknownStatus(String),
}
