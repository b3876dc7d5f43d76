//! Validation errors raised by the parameter layer.

use thiserror::Error;

/// Errors that can occur when constructing or updating element parameters
///
/// Raised synchronously at the point of violation and never retried; the
/// caller decides whether to clamp, retry or abort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Parameter '{name}' value {value} is outside bounds: [{min}, {max}]")]
    OutOfBounds {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Expected {expected} parameter values, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Parameter '{name}' not found")]
    UnknownParameter { name: String },

    #[error("Invalid bounds: min ({min}) must not exceed max ({max})")]
    InvalidBounds { min: f64, max: f64 },
}
