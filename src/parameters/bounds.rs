//! Parameter bounds implementation
//!
//! Closed intervals `[min, max]` attached to every element parameter. Both
//! ends are inclusive: a value sitting exactly on a bound is accepted.

use serde::{Deserialize, Serialize};

use crate::parameters::validation::ValidationError;

/// Represents the bounds constraints on a parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

impl Bounds {
    /// Create a new bounds constraint with min and max values
    ///
    /// # Arguments
    ///
    /// * `min` - Minimum allowed value for the parameter
    /// * `max` - Maximum allowed value for the parameter
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min <= max, or an error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use zmodel_rs::parameters::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 1.0).unwrap();
    /// assert_eq!(bounds.min, 0.0);
    /// assert_eq!(bounds.max, 1.0);
    /// assert!(Bounds::new(1.0, 0.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        // Written as a negation so NaN bounds are rejected too
        if !(min <= max) {
            return Err(ValidationError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    /// Const constructor for the static per-element tables.
    ///
    /// The caller guarantees `min <= max`.
    pub const fn closed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a value is within the bounds (inclusive on both ends)
    ///
    /// NaN is never within bounds.
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within the bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
