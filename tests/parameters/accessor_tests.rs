//! Integration tests for parameter accessors
//!
//! Named accessors on the concrete element types and the name-based access of
//! the trait must all write through to the same positional storage.

use crate::test_helpers::{sample_within, seeded_rng};
use zmodel_rs::element::{ElementKind, ImpedanceElement};
use zmodel_rs::elements::{Cpe, Flw, Gerischer, HavriliakNegami};
use zmodel_rs::parameters::{ParameterAccess, ValidationError};

#[test]
fn test_named_accessors_back_positional_storage() {
    let mut hn = HavriliakNegami::default();

    hn.set_r(2.0).unwrap();
    hn.set_tau(0.5).unwrap();
    hn.set_alpha(0.7).unwrap();
    hn.set_beta(0.3).unwrap();

    assert_eq!(hn.parameters().values(), &[2.0, 0.5, 0.7, 0.3]);
    assert_eq!(hn.parameter("R"), Some(2.0));
    assert_eq!(hn.parameter("beta"), Some(0.3));

    // And the other way round
    hn.set_parameter("alpha", 0.1).unwrap();
    assert_eq!(hn.alpha(), 0.1);
    hn.parameters_mut().set(1, 42.0).unwrap();
    assert_eq!(hn.tau(), 42.0);
}

#[test]
fn test_set_get_round_trip_exact() {
    let mut rng = seeded_rng(7);

    for kind in ElementKind::ALL {
        let mut element = kind.default_element();

        for _ in 0..50 {
            for spec in kind.parameter_specs() {
                let value = sample_within(spec, &mut rng);
                element.set_parameter(spec.name, value).unwrap();
                assert_eq!(element.parameter(spec.name), Some(value));
            }
        }
    }
}

#[test]
fn test_setter_visible_to_evaluate() {
    let mut cpe = Cpe::default();
    let before = cpe.evaluate(1.0);

    cpe.set_q0(60.0).unwrap();
    let after = cpe.evaluate(1.0);

    // Doubling Q0 halves the impedance
    assert!((before / after - 2.0).norm() < 1e-12);
}

#[test]
fn test_failed_set_keeps_previous_value() {
    let mut flw = Flw::new(1.0, 2.0).unwrap();

    assert!(flw.set_tau(-1.0).is_err());
    assert!(flw.set_z0(f64::NAN).is_err());
    assert!(flw.set_z0(f64::INFINITY).is_err());

    assert_eq!(flw.z0(), 1.0);
    assert_eq!(flw.tau(), 2.0);
}

#[test]
fn test_flat_update() {
    let mut g: Box<dyn ImpedanceElement> = Box::new(Gerischer::default());

    g.set_parameter_values(&[3.0, 0.25]).unwrap();
    assert_eq!(g.parameter_values(), vec![("R", 3.0), ("tau", 0.25)]);

    // Wrong length and out-of-bounds updates are all-or-nothing
    assert_eq!(
        g.set_parameter_values(&[1.0]),
        Err(ValidationError::LengthMismatch {
            expected: 2,
            found: 1
        })
    );
    assert!(g.set_parameter_values(&[1.0, 1e9]).is_err());
    assert_eq!(g.parameters().values(), &[3.0, 0.25]);
}

#[test]
fn test_reset_restores_defaults() {
    let mut element = ElementKind::Zarc.default_element();
    element.set_parameter_values(&[5.0, 5.0, 0.6]).unwrap();

    element.parameters_mut().reset();
    assert_eq!(element.parameters().values(), ElementKind::Zarc.default_values().as_slice());
}
