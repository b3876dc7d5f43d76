use thiserror::Error;

use crate::parameters::ValidationError;

/// Error types for the zmodel-rs library.
#[derive(Error, Debug)]
pub enum ZModelError {
    /// A parameter value or parameter list was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An element symbol that does not name any known element.
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Frequency input outside the evaluable domain.
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error for cases that don't fit the other categories.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for zmodel-rs operations.
pub type Result<T> = std::result::Result<T, ZModelError>;
