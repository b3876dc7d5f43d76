//! Resistor with a Havriliak-Negami relaxation.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::{j_omega, real_power};
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// A resistor in parallel with a Havriliak-Negami type dispersion.
///
/// The impedance is defined as:
///
/// Z(f) = R / (1 + (jωτ)^α)^β
///
/// Where:
/// - R: the resistance in Ohm
/// - τ: the time constant in seconds
/// - α: symmetric broadening exponent in `[0, 1]`
/// - β: asymmetry exponent in `[0, 1]`
///
/// With β = 1 this is the Cole-Cole (R‖CPE) element, and with α = β = 1 the
/// ideal R‖C semicircle `R / (1 + jωτ)`.
///
/// # Examples
///
/// ```
/// use zmodel_rs::element::ImpedanceElement;
/// use zmodel_rs::elements::HavriliakNegami;
///
/// let hn = HavriliakNegami::new(1.0, 1.0, 1.0, 1.0).unwrap();
/// let z = hn.evaluate(0.0);
/// assert!((z.re - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HavriliakNegami {
    params: ParameterVector<4>,
}

impl HavriliakNegami {
    /// Parameter table: `R`, `tau`, `alpha`, `beta`.
    pub const PARAMETERS: [ParameterSpec; 4] = [
        ParameterSpec::new("R", "Ohm", 0.01, 1e-4, 1e4),
        ParameterSpec::new("tau", "s", 1.0, 1e-6, 1e3),
        ParameterSpec::new("alpha", "1", 0.95, 0.0, 1.0),
        ParameterSpec::new("beta", "1", 0.95, 0.0, 1.0),
    ];

    const R: usize = 0;
    const TAU: usize = 1;
    const ALPHA: usize = 2;
    const BETA: usize = 3;

    /// Create a new Havriliak-Negami element
    ///
    /// # Arguments
    ///
    /// * `r` - Resistance in Ohm, within `[1e-4, 1e4]`
    /// * `tau` - Time constant in seconds, within `[1e-6, 1e3]`
    /// * `alpha` - Broadening exponent, within `[0, 1]`
    /// * `beta` - Asymmetry exponent, within `[0, 1]`
    pub fn new(r: f64, tau: f64, alpha: f64, beta: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[r, tau, alpha, beta])?,
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

    /// Broadening exponent α
    pub fn alpha(&self) -> f64 {
        self.params.get(Self::ALPHA)
    }

    /// Set the broadening exponent α
    pub fn set_alpha(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::ALPHA, value)
    }

    /// Asymmetry exponent β
    pub fn beta(&self) -> f64 {
        self.params.get(Self::BETA)
    }

    /// Set the asymmetry exponent β
    pub fn set_beta(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::BETA, value)
    }
}

impl Default for HavriliakNegami {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for HavriliakNegami {
    fn kind(&self) -> ElementKind {
        ElementKind::HavriliakNegami
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        let relaxation = real_power(j_omega(frequency_hz) * self.tau(), self.alpha());
        self.r() / real_power(1.0 + relaxation, self.beta())
    }
}
