//! Finite-length Warburg element.

use num_complex::Complex64;

use crate::element::{ElementKind, ImpedanceElement};
use crate::frequency::j_omega;
use crate::parameters::{ParameterAccess, ParameterSpec, ParameterVector, ValidationError};

/// Beyond this real part `tanh` equals ±1 to double precision.
const TANH_SATURATION: f64 = 20.0;

/// A finite-length (short) Warburg element.
///
/// The impedance is defined as:
///
/// Z(f) = Z0 * tanh(√(jωτ)) / √(jωτ)
///
/// Where:
/// - Z0: the impedance approached at low frequency, in Ohm
/// - τ: the diffusion time constant, in seconds
///
/// At high frequency the element follows the 45° Warburg line and then curls
/// down onto the real axis, ending at Z0 for f → 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Flw {
    params: ParameterVector<2>,
}

impl Flw {
    /// Parameter table: `Z0`, `tau`.
    pub const PARAMETERS: [ParameterSpec; 2] = [
        ParameterSpec::new("Z0", "Ohm", 1e-2, 1e-9, 1e9),
        ParameterSpec::new("tau", "s", 1e0, 1e-9, 1e9),
    ];

    const Z0: usize = 0;
    const TAU: usize = 1;

    /// Create a new finite-length Warburg element
    ///
    /// # Arguments
    ///
    /// * `z0` - Low-frequency impedance in Ohm, within `[1e-9, 1e9]`
    /// * `tau` - Time constant in seconds, within `[1e-9, 1e9]`
    pub fn new(z0: f64, tau: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            params: ParameterVector::new(&Self::PARAMETERS, &[z0, tau])?,
        })
    }

    /// Low-frequency impedance Z0
    pub fn z0(&self) -> f64 {
        self.params.get(Self::Z0)
    }

    /// Set the low-frequency impedance Z0
    pub fn set_z0(&mut self, value: f64) -> Result<(), ValidationError> {
        self.params.set(Self::Z0, value)
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

impl Default for Flw {
    fn default() -> Self {
        Self {
            params: ParameterVector::with_defaults(&Self::PARAMETERS),
        }
    }
}

impl ImpedanceElement for Flw {
    fn kind(&self) -> ElementKind {
        ElementKind::Flw
    }

    fn parameters(&self) -> &dyn ParameterAccess {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess {
        &mut self.params
    }

    fn evaluate(&self, frequency_hz: f64) -> Complex64 {
        let s = (j_omega(frequency_hz) * self.tau()).sqrt();
        // tanh(s) / s -> 1 as s -> 0
        if s == Complex64::new(0.0, 0.0) {
            return Complex64::new(self.z0(), 0.0);
        }
        self.z0() / s * saturating_tanh(s)
    }
}

/// Complex `tanh` that does not overflow to NaN for large real parts.
///
/// The textbook expansion divides `sinh(2x)` by `cosh(2x) + cos(2y)`, and both
/// overflow once `2x` exceeds ~710.
fn saturating_tanh(z: Complex64) -> Complex64 {
    if z.re.abs() > TANH_SATURATION {
        Complex64::new(z.re.signum(), 0.0)
    } else {
        z.tanh()
    }
}
