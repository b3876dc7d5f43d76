//! Ideal capacitor.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::j_omega;
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// An ideal capacitor, `Z(f) = 1 / (jωC)`.
///
/// A vertical line in the Nyquist plot, diverging as f → 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    params: ParameterVector<1>,
}

impl Capacitor {
    /// Parameter table: `C`.
    pub const PARAMETERS: [ParameterSpec; 1] = [ParameterSpec::new("C", "F", 300.0, 1e-6, 1e6)];

    /// Create a new capacitor with capacitance `c` in F, within `[1e-6, 1e6]`
    pub fn new(c: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[c])?,
        })
    }

    pub fn c(&self) -> f64 {
        self.params.get(0)
    }

    pub fn set_c(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(0, value)
    }
}

impl Default for Capacitor {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Capacitor {
    fn kind(&self) -> ElementKind {
        ElementKind::Capacitor
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        1.0 / (j_omega(frequency_hz) * self.c())
    }
}
