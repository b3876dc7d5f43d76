//! Frequency sweeps and spectra

use approx::assert_relative_eq;
use ndarray::array;
use zmodel_rs::element::{ElementKind, ImpedanceElement};
use zmodel_rs::elements::{Gerischer, Resistor};
use zmodel_rs::error::ZModelError;
use zmodel_rs::frequency;
use zmodel_rs::spectrum::Spectrum;

#[test]
fn test_default_sweep_spectrum() {
    let g = Gerischer::new(1.0, 1.0).unwrap();
    let f = frequency::default_range();
    let spectrum = Spectrum::checked(&g, &f).unwrap();

    assert_eq!(spectrum.len(), 90);
    assert_eq!(spectrum.frequency_hz, f);

    // Gerischer phase lies between -45° and 0°
    for &phase in spectrum.phase_deg.iter() {
        assert!(phase <= 0.0 && phase >= -45.0 - 1e-9, "phase {}", phase);
    }

    // Descending frequency: the real part grows towards R
    let re = spectrum.real();
    assert!(re.windows(2).into_iter().all(|w| w[0] <= w[1]));
    assert_relative_eq!(re[89], 1.0, max_relative = 1e-2);
}

#[test]
fn test_checked_rejects_bad_frequencies() {
    let r = Resistor::default();

    for bad in [array![0.0], array![-1.0, 1.0], array![f64::NAN], array![1.0, f64::INFINITY]] {
        assert!(matches!(
            Spectrum::checked(&r, &bad),
            Err(ZModelError::InvalidFrequency(_))
        ));
    }
}

#[test]
fn test_unchecked_zero_frequency_policy() {
    // Ideal capacitor at 0 Hz divides by zero: no panic, non-finite result
    let c = ElementKind::Capacitor.default_element();
    let z = c.evaluate(0.0);
    assert!(!z.re.is_finite() || !z.im.is_finite());

    // Resistor is defined everywhere
    let r = ElementKind::Resistor.default_element();
    assert_eq!(r.evaluate(0.0).re, 0.01);

    // FLW takes its DC limit Z0 rather than 0/0
    let flw = ElementKind::Flw.default_element();
    let z = flw.evaluate(0.0);
    assert_eq!((z.re, z.im), (0.01, 0.0));
}

#[test]
fn test_oversized_sweep_is_an_error() {
    assert!(matches!(
        frequency::log_range(1e6, 1e-3, usize::MAX / 4),
        Err(ZModelError::InvalidFrequency(_))
    ));
}

#[test]
fn test_spectrum_from_trait_object() {
    let element = ElementKind::Zarc.default_element();
    let f = frequency::log_range(1e5, 1e-2, 5).unwrap();

    let spectrum = element.spectrum(&f);
    assert_eq!(spectrum.len(), 35);
    assert_eq!(spectrum.impedance_ohm, element.evaluate_array(&f));
    assert_eq!(spectrum.magnitude().len(), 35);
}
