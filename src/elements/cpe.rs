//! Constant phase element.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::{j_omega, real_power};
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// A constant phase element (non-ideal capacitor).
///
/// The impedance is defined as:
///
/// Z(f) = 1 / (Q0 * (jω)^α)
///
/// Where:
/// - Q0: the magnitude scale in S·s^α
/// - α: the phase exponent; 0 behaves like an ideal resistor, 1 like an ideal
///   capacitor
///
/// In a Nyquist plot the element is a straight line whose angle is set by α.
///
/// # Examples
///
/// ```
/// use zmodel_rs::element::ImpedanceElement;
/// use zmodel_rs::elements::Cpe;
///
/// let cpe = Cpe::new(30.0, 0.95).unwrap();
/// let z = cpe.evaluate(1.0);
/// assert!(z.im < 0.0);
///
/// // α must lie in [0, 1]
/// assert!(Cpe::new(30.0, 1.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cpe {
    params: ParameterVector<2>,
}

impl Cpe {
    /// Parameter table: `Q0`, `alpha`.
    pub const PARAMETERS: [ParameterSpec; 2] = [
        ParameterSpec::new("Q0", "S s^alpha", 30.0, 1e-6, 1e6),
        ParameterSpec::new("alpha", "1", 0.95, 0.0, 1.0),
    ];

    const Q0: usize = 0;
    const ALPHA: usize = 1;

    /// Create a new constant phase element
    ///
    /// # Arguments
    ///
    /// * `q0` - Magnitude scale in S·s^α, within `[1e-6, 1e6]`
    /// * `alpha` - Phase exponent, within `[0, 1]`
    pub fn new(q0: f64, alpha: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[q0, alpha])?,
        })
    }

    /// Magnitude scale Q0
    pub fn q0(&self) -> f64 {
        self.params.get(Self::Q0)
    }

    /// Set the magnitude scale Q0
    pub fn set_q0(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::Q0, value)
    }

    /// Phase exponent α
    pub fn alpha(&self) -> f64 {
        self.params.get(Self::ALPHA)
    }

    /// Set the phase exponent α
    pub fn set_alpha(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::ALPHA, value)
    }
}

impl Default for Cpe {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Cpe {
    fn kind(&self) -> ElementKind {
        ElementKind::Cpe
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        1.0 / (self.q0() * real_power(j_omega(frequency_hz), self.alpha()))
    }
}
