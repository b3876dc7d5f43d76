//! Resistor in parallel with a constant phase element.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::{j_omega, real_power};
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// An R‖CPE element (ZARC, Cole-Cole form).
///
/// Z(f) = R / (1 + (jωτ)^α)
///
/// Appears as a depressed semicircle of diameter R. α is restricted to
/// `[0.5, 1]`; below 0.5 the arc flattens beyond what this element is used
/// to describe.
#[derive(Debug, Clone, PartialEq)]
pub struct Zarc {
    params: ParameterVector<3>,
}

impl Zarc {
    /// Parameter table: `R`, `tau`, `alpha`.
    pub const PARAMETERS: [ParameterSpec; 3] = [
        ParameterSpec::new("R", "Ohm", 0.01, 1e-4, 1e4),
        ParameterSpec::new("tau", "s", 1.0, 1e-6, 1e3),
        ParameterSpec::new("alpha", "1", 0.95, 0.5, 1.0),
    ];

    pub fn new(r: f64, tau: f64, alpha: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[r, tau, alpha])?,
        })
    }

    pub fn r(&self) -> f64 {
        self.params.get(0)
    }

    pub fn set_r(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(0, value)
    }

    pub fn tau(&self) -> f64 {
        self.params.get(1)
    }

    pub fn set_tau(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(1, value)
    }

    pub fn alpha(&self) -> f64 {
        self.params.get(2)
    }

    pub fn set_alpha(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(2, value)
    }
}

impl Default for Zarc {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Zarc {
    fn kind(&self) -> ElementKind {
        ElementKind::Zarc
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        self.r() / (1.0 + real_power(j_omega(frequency_hz) * self.tau(), self.alpha()))
    }
}
