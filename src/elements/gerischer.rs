//! Gerischer element.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::j_omega;
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// The classical Gerischer impedance, modelling coupled diffusion and reaction.
///
/// The impedance is defined as:
///
/// Z(f) = R / √(1 + jωτ)
///
/// Where:
/// - R: the Gerischer resistance in Ohm
/// - τ: the characteristic time constant in seconds
///
/// Appears as an asymmetric, non-depressed arc that meets the real axis at R.
#[derive(Debug, Clone, PartialEq)]
pub struct Gerischer {
    params: ParameterVector<2>,
}

impl Gerischer {
    /// Parameter table: `R`, `tau`.
    pub const PARAMETERS: [ParameterSpec; 2] = [
        ParameterSpec::new("R", "Ohm", 0.01, 1e-4, 1e4),
        ParameterSpec::new("tau", "s", 1.0, 1e-6, 1e3),
    ];

    const R: usize = 0;
    const TAU: usize = 1;

    /// Create a new Gerischer element
    ///
    /// # Arguments
    ///
    /// * `r` - Resistance in Ohm, within `[1e-4, 1e4]`
    /// * `tau` - Time constant in seconds, within `[1e-6, 1e3]`
    pub fn new(r: f64, tau: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[r, tau])?,
        })
    }

    /// Resistance R
    pub fn r(&self) -> f64 {
        self.params.get(Self::R)
    }

    /// Set the resistance R
    pub fn set_r(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::R, value)
    }

    /// Time constant τ
    pub fn tau(&self) -> f64 {
        self.params.get(Self::TAU)
    }

    /// Set the time constant τ
    pub fn set_tau(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::TAU, value)
    }
}

impl Default for Gerischer {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Gerischer {
    fn kind(&self) -> ElementKind {
        ElementKind::Gerischer
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        self.r() / (1.0 + j_omega(frequency_hz) * self.tau()).sqrt()
    }
}
