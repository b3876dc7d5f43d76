//! Impedance element trait and element kinds.
//!
//! This module defines the [`ImpedanceElement`] trait, the common interface of
//! every equivalent-circuit element: a pure evaluation of complex impedance
//! over frequency, plus access to the element's bounded parameters. It also
//! defines [`ElementKind`], the tag naming each concrete element by its
//! conventional symbol.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::ElementConfig;
use crate::elements::{
    Capacitor, Cpe, Flw, Gerischer, HavriliakNegami, Inductor, Resistor, Warburg, Zarc,
};
use crate::error::ZModelError;
use crate::parameters::{ParameterAccess, ParameterSpec, ValidationError};
use crate::spectrum::Spectrum;

/// A trait representing an equivalent-circuit element.
///
/// Implementors own their parameters and compute `Z(f)` from them. Evaluation
/// reads parameters only, so it may run concurrently from several threads on
/// the same element as long as no setter runs at the same time; the borrow
/// checker enforces exactly that for `&self` versus `&mut self`.
pub trait ImpedanceElement: fmt::Debug + Send + Sync {
    /// The kind of this element.
    fn kind(&self) -> ElementKind;

    /// Returns a view of the element's parameters.
    fn parameters(&self) -> &dyn ParameterAccess;

    /// Returns a mutable view of the element's parameters.
    fn parameters_mut(&mut self) -> &mut dyn ParameterAccess;

    /// Evaluates the impedance at a single frequency.
    ///
    /// # Arguments
    ///
    /// * `frequency_hz` - Excitation frequency in Hz
    ///
    /// # Returns
    ///
    /// * The complex impedance in Ohm
    ///
    /// Frequencies are not checked. Zero, negative or non-finite input yields
    /// whatever IEEE complex arithmetic produces for the element's formula,
    /// which may be infinite or NaN; use [`crate::frequency::validate`] first
    /// when the input is untrusted.
    fn evaluate(&self, frequency_hz: f64) -> Complex64;

    /// Evaluates the impedance element-wise over an array of frequencies.
    ///
    /// The result has the same length as the input and entry `i` equals
    /// `self.evaluate(frequency_hz[i])`.
    fn evaluate_array(&self, frequency_hz: &Array1<f64>) -> Array1<Complex64> {
        frequency_hz.mapv(|f| self.evaluate(f))
    }

    /// Evaluates the impedance over an array of frequencies using Rayon.
    ///
    /// Produces the same values as [`ImpedanceElement::evaluate_array`].
    #[cfg(feature = "parallel")]
    fn evaluate_par(&self, frequency_hz: &Array1<f64>) -> Array1<Complex64> {
        crate::utils::parallel::evaluate_parallel(self, frequency_hz)
    }

    /// Evaluates the element into a [`Spectrum`] (frequency, impedance, phase).
    fn spectrum(&self, frequency_hz: &Array1<f64>) -> Spectrum {
        Spectrum::from_impedance(frequency_hz.clone(), self.evaluate_array(frequency_hz))
    }

    /// Returns the `(name, value)` pairs of all parameters, in order.
    fn parameter_values(&self) -> Vec<(&'static str, f64)> {
        let params = self.parameters();
        params
            .specs()
            .iter()
            .zip(params.values())
            .map(|(spec, &value)| (spec.name, value))
            .collect()
    }

    /// Returns the names of all parameters in the element.
    fn parameter_names(&self) -> Vec<&'static str> {
        self.parameters().specs().iter().map(|spec| spec.name).collect()
    }

    /// Returns the value of the named parameter, if the element has it.
    fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters().get_named(name)
    }

    /// Sets the named parameter, enforcing its bounds.
    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ValidationError> {
        self.parameters_mut().set_named(name, value)
    }

    /// Replaces all parameter values at once, in order.
    ///
    /// This is the flat interface an external fitting loop drives between
    /// evaluations; a rejected update changes nothing.
    fn set_parameter_values(&mut self, values: &[f64]) -> Result<(), ValidationError> {
        self.parameters_mut().set_all(values)
    }

    /// Returns the lower bounds of all parameters, in order.
    fn lower_bounds(&self) -> Vec<f64> {
        self.parameters().lower_bounds()
    }

    /// Returns the upper bounds of all parameters, in order.
    fn upper_bounds(&self) -> Vec<f64> {
        self.parameters().upper_bounds()
    }

    /// Describes this element as a serializable configuration.
    fn to_config(&self) -> ElementConfig {
        ElementConfig::new(self.kind()).with_parameters(self.parameter_values())
    }
}

/// The kind of an impedance element, named by its conventional symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementKind {
    /// Constant phase element
    #[serde(rename = "CPE")]
    Cpe,
    /// Finite-length Warburg element
    #[serde(rename = "FLW")]
    Flw,
    /// Gerischer element
    #[serde(rename = "G")]
    Gerischer,
    /// Resistor in parallel with a Havriliak-Negami element
    #[serde(rename = "R_HN")]
    HavriliakNegami,
    /// Ideal resistor
    #[serde(rename = "R")]
    Resistor,
    /// Ideal capacitor
    #[serde(rename = "C")]
    Capacitor,
    /// Ideal inductor
    #[serde(rename = "L")]
    Inductor,
    /// Semi-infinite Warburg element
    #[serde(rename = "W")]
    Warburg,
    /// Resistor in parallel with a constant phase element
    #[serde(rename = "R_CPE")]
    Zarc,
}

impl ElementKind {
    /// Every element kind, in declaration order.
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Cpe,
        ElementKind::Flw,
        ElementKind::Gerischer,
        ElementKind::HavriliakNegami,
        ElementKind::Resistor,
        ElementKind::Capacitor,
        ElementKind::Inductor,
        ElementKind::Warburg,
        ElementKind::Zarc,
    ];

    /// The conventional symbol of this element kind.
    pub fn symbol(&self) -> &'static str {
        match self {
            ElementKind::Cpe => "CPE",
            ElementKind::Flw => "FLW",
            ElementKind::Gerischer => "G",
            ElementKind::HavriliakNegami => "R_HN",
            ElementKind::Resistor => "R",
            ElementKind::Capacitor => "C",
            ElementKind::Inductor => "L",
            ElementKind::Warburg => "W",
            ElementKind::Zarc => "R_CPE",
        }
    }

    /// The static parameter table shared by every element of this kind.
    pub fn parameter_specs(&self) -> &'static [ParameterSpec] {
        match self {
            ElementKind::Cpe => &Cpe::PARAMETERS,
            ElementKind::Flw => &Flw::PARAMETERS,
            ElementKind::Gerischer => &Gerischer::PARAMETERS,
            ElementKind::HavriliakNegami => &HavriliakNegami::PARAMETERS,
            ElementKind::Resistor => &Resistor::PARAMETERS,
            ElementKind::Capacitor => &Capacitor::PARAMETERS,
            ElementKind::Inductor => &Inductor::PARAMETERS,
            ElementKind::Warburg => &Warburg::PARAMETERS,
            ElementKind::Zarc => &Zarc::PARAMETERS,
        }
    }

    /// The default parameter values of this kind, in order.
    pub fn default_values(&self) -> Vec<f64> {
        self.parameter_specs().iter().map(|spec| spec.default).collect()
    }

    /// Builds an element of this kind with default parameter values.
    pub fn default_element(&self) -> Box<dyn ImpedanceElement> {
        match self {
            ElementKind::Cpe => Box::new(Cpe::default()),
            ElementKind::Flw => Box::new(Flw::default()),
            ElementKind::Gerischer => Box::new(Gerischer::default()),
            ElementKind::HavriliakNegami => Box::new(HavriliakNegami::default()),
            ElementKind::Resistor => Box::new(Resistor::default()),
            ElementKind::Capacitor => Box::new(Capacitor::default()),
            ElementKind::Inductor => Box::new(Inductor::default()),
            ElementKind::Warburg => Box::new(Warburg::default()),
            ElementKind::Zarc => Box::new(Zarc::default()),
        }
    }

    /// Builds an element of this kind from positional parameter values.
    ///
    /// # Returns
    ///
    /// * The element, or a [`ValidationError`] if the number of values is
    ///   wrong or any value lies outside its bounds
    pub fn build(&self, values: &[f64]) -> Result<Box<dyn ImpedanceElement>, ValidationError> {
        let mut element = self.default_element();
        element.set_parameter_values(values)?;
        Ok(element)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ElementKind {
    type Err = ZModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.symbol() == s)
            .ok_or_else(|| ZModelError::UnknownElement(s.to_string()))
    }
}
