//! Parallel evaluation of impedance elements.
//!
//! Element evaluation is a pure function of frequency and the element's
//! parameters, so every frequency point (and every element) can be evaluated
//! independently. These helpers spread that work over Rayon's thread pool.

use ndarray::Array1;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::element::ImpedanceElement;

/// Evaluate an element over an array of frequencies in parallel.
///
/// The result is identical to
/// [`ImpedanceElement::evaluate_array`]; only the scheduling differs.
///
/// # Arguments
///
/// * `element` - The element to evaluate
/// * `frequency_hz` - The frequencies in Hz
///
/// # Returns
///
/// * `Array1<Complex64>` - The impedance at each frequency, in input order
pub fn evaluate_parallel<E>(element: &E, frequency_hz: &Array1<f64>) -> Array1<Complex64>
where
    E: ImpedanceElement + ?Sized,
{
    let frequencies: Vec<f64> = frequency_hz.iter().copied().collect();

    let impedance: Vec<Complex64> = frequencies
        .par_iter()
        .map(|&f| element.evaluate(f))
        .collect();

    Array1::from_vec(impedance)
}

/// Evaluate several elements over the same frequencies in parallel.
///
/// # Returns
///
/// * One impedance array per element, in the order of `elements`
pub fn evaluate_elements_parallel(
    elements: &[Box<dyn ImpedanceElement>],
    frequency_hz: &Array1<f64>,
) -> Vec<Array1<Complex64>> {
    elements
        .par_iter()
        .map(|element| element.evaluate_array(frequency_hz))
        .collect()
}
