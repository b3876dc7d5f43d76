//! Frequency helpers.
//!
//! Angular frequency, logarithmic frequency grids as commonly used for
//! impedance sweeps, and validation of untrusted frequency input.

use std::f64::consts::TAU;

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{Result, ZModelError};

/// Angular frequency `ω = 2πf` in rad/s.
pub fn angular(frequency_hz: f64) -> f64 {
    TAU * frequency_hz
}

/// The purely imaginary `jω` for a frequency in Hz.
pub fn j_omega(frequency_hz: f64) -> Complex64 {
    Complex64::new(0.0, angular(frequency_hz))
}

/// Raise a complex base to a real exponent.
///
/// Integer exponents are computed by repeated multiplication, so an exponent
/// of exactly 1 returns `z` unchanged and the ideal limits of the fractional
/// elements (Debye, ideal capacitor) are reproduced bit for bit. Other
/// exponents go through `Complex64::powf`.
pub fn real_power(z: Complex64, exponent: f64) -> Complex64 {
    if exponent == 1.0 {
        z
    } else if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as f64 {
        z.powi(exponent as i32)
    } else {
        z.powf(exponent)
    }
}

/// Create a logarithmically spaced frequency grid, from high to low.
///
/// The number of points is the number of whole decades between the bounds'
/// leading powers of ten times `points_per_decade`, i.e.
/// `(floor(log10 f_max) - floor(log10 f_min)) * points_per_decade`. Both
/// bounds are included whenever at least two points are produced.
///
/// # Arguments
///
/// * `f_max_hz` - Highest frequency (fast processes, induction)
/// * `f_min_hz` - Lowest frequency (slow processes, diffusion)
/// * `points_per_decade` - Number of points per decade
///
/// # Returns
///
/// * The frequencies in descending order, or an error if either bound is not
///   a positive finite number, if `f_min_hz > f_max_hz`, or if
///   `points_per_decade` is zero
///
/// # Examples
///
/// ```
/// use zmodel_rs::frequency::log_range;
///
/// let f = log_range(1e3, 1.0, 10).unwrap();
/// assert_eq!(f.len(), 30);
/// assert!((f[0] - 1e3).abs() < 1e-9);
/// assert!((f[29] - 1.0).abs() < 1e-12);
/// ```
pub fn log_range(f_max_hz: f64, f_min_hz: f64, points_per_decade: usize) -> Result<Array1<f64>> {
    for (label, value) in [("f_max", f_max_hz), ("f_min", f_min_hz)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ZModelError::InvalidFrequency(format!(
                "{} must be positive and finite, got {}",
                label, value
            )));
        }
    }

    if f_min_hz > f_max_hz {
        return Err(ZModelError::InvalidFrequency(format!(
            "f_min ({}) must not exceed f_max ({})",
            f_min_hz, f_max_hz
        )));
    }

    if points_per_decade == 0 {
        return Err(ZModelError::InvalidFrequency(
            "points_per_decade must be at least 1".to_string(),
        ));
    }

    let decades = f_max_hz.log10().floor() - f_min_hz.log10().floor();
    let n = (decades as usize).checked_mul(points_per_decade).ok_or_else(|| {
        ZModelError::InvalidFrequency(format!(
            "{} decades at {} points per decade is too many points",
            decades, points_per_decade
        ))
    })?;

    Ok(geomspace_descending(f_max_hz, f_min_hz, n))
}

/// The default sweep: 1 MHz down to 1 mHz, 10 points per decade.
pub fn default_range() -> Array1<f64> {
    geomspace_descending(1e6, 1e-3, 90)
}

fn geomspace_descending(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_vec(vec![stop]),
        _ => {
            let (ls, le) = (start.ln(), stop.ln());
            let step = (le - ls) / (n - 1) as f64;
            let mut grid = Array1::from_shape_fn(n, |i| (ls + i as f64 * step).exp());
            // Pin the end points against rounding in exp/ln
            grid[0] = start;
            grid[n - 1] = stop;
            grid
        }
    }
}

/// Check that every frequency is positive and finite.
///
/// # Returns
///
/// * `Ok(())`, or [`ZModelError::InvalidFrequency`] naming the first offending
///   entry
pub fn validate(frequency_hz: &Array1<f64>) -> Result<()> {
    match frequency_hz
        .iter()
        .enumerate()
        .find(|(_, f)| !f.is_finite() || **f <= 0.0)
    {
        Some((index, f)) => Err(ZModelError::InvalidFrequency(format!(
            "frequency at index {} must be positive and finite, got {}",
            index, f
        ))),
        None => Ok(()),
    }
}
