//! # Error Types
//!
//! Defines the error type shared by the foundational crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Parse failures at the boundary (stage names, actions, dates, identifiers)
//! are reported as `Validation` with the offending input quoted.

use thiserror::Error;

/// Top-level error type for the vehicle movement tracker's core types.
#[derive(Error, Debug)]
pub enum VmtError {
    /// A value failed format or domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for VmtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
