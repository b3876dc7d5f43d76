//! Concrete reference values

use approx::assert_relative_eq;
use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, PI};
use zmodel_rs::element::ImpedanceElement;
use zmodel_rs::elements::{Cpe, Flw, HavriliakNegami};
use zmodel_rs::parameters::ValidationError;

use crate::test_helpers::complex_approx_eq;

#[test]
fn test_cpe_at_one_hertz() {
    let cpe = Cpe::new(30.0, 0.95).unwrap();
    let z = cpe.evaluate(1.0);

    let magnitude = 1.0 / (30.0 * (2.0 * PI).powf(0.95));
    let expected = Complex64::from_polar(magnitude, -0.95 * FRAC_PI_2);

    assert!(z.im < 0.0, "CPE must be capacitive");
    assert!(complex_approx_eq(z, expected, 1e-12));
}

#[test]
fn test_hn_reduces_to_debye() {
    let hn = HavriliakNegami::new(1.0, 1.0, 1.0, 1.0).unwrap();

    for f in [0.0, 1e-4, 0.1, 1.0, 3.7, 1e2, 1e5] {
        let expected = 1.0 / Complex64::new(1.0, 2.0 * PI * f);
        assert_eq!(hn.evaluate(f), expected, "mismatch at {} Hz", f);
    }
}

#[test]
fn test_cpe_alpha_above_max_rejected() {
    let result = Cpe::new(30.0, 1.5);
    assert!(matches!(
        result,
        Err(ValidationError::OutOfBounds { name: "alpha", .. })
    ));
}

#[test]
fn test_flw_low_frequency_tends_to_z0() {
    let flw = Flw::new(0.01, 1.0).unwrap();

    for f in [1e-6, 1e-8, 1e-10] {
        assert!(complex_approx_eq(flw.evaluate(f), Complex64::new(0.01, 0.0), 1e-5));
    }
}
