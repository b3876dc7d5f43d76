//! Parameter definition
//!
//! A [`ParameterSpec`] describes one physical parameter of an element type:
//! its name, unit, default value and closed bounds. Every element type keeps
//! its specs in a `static` table, so bounds and defaults are shared, read-only
//! data and never per-instance state.

use serde::Serialize;

use crate::parameters::bounds::Bounds;
use crate::parameters::validation::ValidationError;

/// Static description of one element parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Name of the parameter, as used by named accessors and configs
    pub name: &'static str,

    /// Physical unit, informational only
    pub unit: &'static str,

    /// Value used when the caller does not supply one
    pub default: f64,

    /// Closed interval of admissible values
    pub bounds: Bounds,
}

impl ParameterSpec {
    /// Create a parameter spec for a static table
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the parameter
    /// * `unit` - Physical unit of the parameter
    /// * `default` - Default value, which must lie within `[min, max]`
    /// * `min` - Minimum allowed value
    /// * `max` - Maximum allowed value
    pub const fn new(
        name: &'static str,
        unit: &'static str,
        default: f64,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            name,
            unit,
            default,
            bounds: Bounds::closed(min, max),
        }
    }

    /// Minimum allowed value
    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Maximum allowed value
    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Check a candidate value against this parameter's bounds
    ///
    /// # Returns
    ///
    /// `Ok(value)` if the value lies within `[min, max]`, or
    /// [`ValidationError::OutOfBounds`] otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use zmodel_rs::parameters::ParameterSpec;
    ///
    /// let alpha = ParameterSpec::new("alpha", "1", 0.95, 0.0, 1.0);
    /// assert!(alpha.validate(1.0).is_ok());
    /// assert!(alpha.validate(1.5).is_err());
    /// ```
    pub fn validate(&self, value: f64) -> Result<f64, ValidationError> {
        if !self.bounds.is_within_bounds(value) {
            return Err(ValidationError::OutOfBounds {
                name: self.name,
                value,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        Ok(value)
    }
}
