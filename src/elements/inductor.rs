//! Ideal inductor.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::j_omega;
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// An ideal inductor, `Z(f) = jωL`.
///
/// Usually stands in for cable inductance, visible at the high-frequency end
/// of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Inductor {
    params: ParameterVector<1>,
}

impl Inductor {
    /// Parameter table: `L`.
    pub const PARAMETERS: [ParameterSpec; 1] = [ParameterSpec::new("L", "H", 1e-12, 1e-12, 1e4)];

    /// Create a new inductor with inductance `l` in H, within `[1e-12, 1e4]`
    pub fn new(l: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[l])?,
        })
    }

    pub fn l(&self) -> f64 {
        self.params.get(0)
    }

    pub fn set_l(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(0, value)
    }
}

impl Default for Inductor {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Inductor {
    fn kind(&self) -> ElementKind {
        ElementKind::Inductor
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        j_omega(frequency_hz) * self.l()
    }
}
