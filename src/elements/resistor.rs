//! Ideal resistor.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// An ideal Ohmic resistance, `Z(f) = R`.
///
/// Typically the electrolyte or contact resistance: a single point on the
/// real axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    params: ParameterVector<1>,
}

impl Resistor {
    /// Parameter table: `R`.
    pub const PARAMETERS: [ParameterSpec; 1] = [ParameterSpec::new("R", "Ohm", 0.01, 1e-4, 1e4)];

    pub fn new(r: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[r])?,
        })
    }

    pub fn r(&self) -> f64 {
        self.params.get(0)
    }

    pub fn set_r(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(0, value)
    }
}

impl Default for Resistor {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Resistor {
    fn kind(&self) -> ElementKind {
        ElementKind::Resistor
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, _frequency_hz: f64) -> Complex64 {
        Complex64::new(self.r(), 0.0)
    }
}
