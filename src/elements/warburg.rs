//! Semi-infinite Warburg element.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::angular;
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// The ideal (semi-infinite) Warburg diffusion impedance.
///
/// Z(f) = Aw / √ω - j Aw / √ω
///
/// with the Warburg coefficient Aw in Ohm·s^-1/2. A straight 45° line.
#[derive(Debug, Clone, PartialEq)]
pub struct Warburg {
    params: ParameterVector<1>,
}

impl Warburg {
    /// Parameter table: `Aw`.
    pub const PARAMETERS: [ParameterSpec; 1] =
        [ParameterSpec::new("Aw", "Ohm s^-1/2", 1e-6, 1e-9, 1e9)];

    /// Create a new Warburg element with coefficient `aw`, within `[1e-9, 1e9]`
    pub fn new(aw: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[aw])?,
        })
    }

    pub fn aw(&self) -> f64 {
        self.params.get(0)
    }

    pub fn set_aw(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(0, value)
    }
}

impl Default for Warburg {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Warburg {
    fn kind(&self) -> ElementKind {
        ElementKind::Warburg
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        let sigma = self.aw() / angular(frequency_hz).sqrt();
        Complex64::new(sigma, -sigma)
    }
}
