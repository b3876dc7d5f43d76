//! Evaluated impedance spectra.
//!
//! A [`Spectrum`] keeps the frequencies an element was evaluated at together
//! with the resulting impedance and its phase in degrees, the triple an
//! impedance plot or a fitting residual needs.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::element::ImpedanceElement;
use crate::error::{Result, ZModelError};
use crate::frequency;

/// Frequency, impedance and phase of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Frequencies in Hz, as passed in
    pub frequency_hz: Array1<f64>,

    /// Complex impedance in Ohm
    pub impedance_ohm: Array1<Complex64>,

    /// Phase of the impedance in degrees
    pub phase_deg: Array1<f64>,
}

impl Spectrum {
    /// Build a spectrum from already computed impedances.
    ///
    /// # Errors
    ///
    /// [`ZModelError::Other`] if the arrays differ in length.
    pub fn new(frequency_hz: Array1<f64>, impedance_ohm: Array1<Complex64>) -> Result<Self> {
        if frequency_hz.len() != impedance_ohm.len() {
            return Err(ZModelError::Other(format!(
                "Expected {} impedance values, got {}",
                frequency_hz.len(),
                impedance_ohm.len()
            )));
        }

        Ok(Self::from_impedance(frequency_hz, impedance_ohm))
    }

    pub(crate) fn from_impedance(
        frequency_hz: Array1<f64>,
        impedance_ohm: Array1<Complex64>,
    ) -> Self {
        let phase_deg = impedance_ohm.mapv(|z| z.arg().to_degrees());
        Self {
            frequency_hz,
            impedance_ohm,
            phase_deg,
        }
    }

    /// Evaluate an element after checking that every frequency is positive
    /// and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::array;
    /// use zmodel_rs::elements::Resistor;
    /// use zmodel_rs::spectrum::Spectrum;
    ///
    /// let r = Resistor::new(10.0).unwrap();
    /// let spectrum = Spectrum::checked(&r, &array![1.0, 10.0]).unwrap();
    /// assert_eq!(spectrum.real(), array![10.0, 10.0]);
    ///
    /// assert!(Spectrum::checked(&r, &array![1.0, -10.0]).is_err());
    /// ```
    pub fn checked<E>(element: &E, frequency_hz: &Array1<f64>) -> Result<Self>
    where
        E: ImpedanceElement + ?Sized,
    {
        frequency::validate(frequency_hz)?;
        Ok(element.spectrum(frequency_hz))
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.frequency_hz.len()
    }

    /// Whether the spectrum has no points
    pub fn is_empty(&self) -> bool {
        self.frequency_hz.is_empty()
    }

    /// Real parts of the impedance
    pub fn real(&self) -> Array1<f64> {
        self.impedance_ohm.mapv(|z| z.re)
    }

    /// Imaginary parts of the impedance
    pub fn imag(&self) -> Array1<f64> {
        self.impedance_ohm.mapv(|z| z.im)
    }

    /// Impedance magnitudes
    pub fn magnitude(&self) -> Array1<f64> {
        self.impedance_ohm.mapv(|z| z.norm())
    }
}
