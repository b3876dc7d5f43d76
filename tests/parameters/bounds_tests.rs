//! Bounds contract for every element kind
//!
//! `set` succeeds iff `min <= value <= max`, both ends inclusive.

use zmodel_rs::element::ElementKind;
use zmodel_rs::elements::{Cpe, Flw, Gerischer, HavriliakNegami};
use zmodel_rs::parameters::ValidationError;

#[test]
fn test_bounds_are_inclusive_for_all_kinds() {
    for kind in ElementKind::ALL {
        let mut element = kind.default_element();

        for spec in kind.parameter_specs() {
            element.set_parameter(spec.name, spec.min()).unwrap();
            assert_eq!(element.parameter(spec.name), Some(spec.min()));

            element.set_parameter(spec.name, spec.max()).unwrap();
            assert_eq!(element.parameter(spec.name), Some(spec.max()));
        }
    }
}

#[test]
fn test_one_unit_outside_fails_for_all_kinds() {
    for kind in ElementKind::ALL {
        let mut element = kind.default_element();

        for spec in kind.parameter_specs() {
            for value in [spec.min() - 1.0, spec.max() + 1.0] {
                match element.set_parameter(spec.name, value) {
                    Err(ValidationError::OutOfBounds { name, min, max, .. }) => {
                        assert_eq!(name, spec.name);
                        assert_eq!(min, spec.min());
                        assert_eq!(max, spec.max());
                    }
                    other => panic!(
                        "{} {}: expected OutOfBounds, got {:?}",
                        kind, spec.name, other
                    ),
                }
            }

            assert_eq!(element.parameter(spec.name), Some(spec.default));
        }
    }
}

#[test]
fn test_documented_bounds() {
    assert_eq!(Cpe::PARAMETERS[0].bounds.min, 1e-6);
    assert_eq!(Cpe::PARAMETERS[0].bounds.max, 1e6);
    assert_eq!(Cpe::PARAMETERS[1].bounds.min, 0.0);
    assert_eq!(Cpe::PARAMETERS[1].bounds.max, 1.0);

    assert_eq!(Flw::PARAMETERS[0].bounds.min, 1e-9);
    assert_eq!(Flw::PARAMETERS[1].bounds.max, 1e9);

    assert_eq!(Gerischer::PARAMETERS[0].default, 0.01);
    assert_eq!(Gerischer::PARAMETERS[1].bounds.max, 1e3);

    let names: Vec<_> = HavriliakNegami::PARAMETERS.iter().map(|spec| spec.name).collect();
    assert_eq!(names, vec!["R", "tau", "alpha", "beta"]);
}

#[test]
fn test_construction_validates_every_variant() {
    assert!(Cpe::new(1e-7, 0.5).is_err());
    assert!(Flw::new(1.0, 0.0).is_err());
    assert!(Gerischer::new(1e5, 1.0).is_err());
    assert!(HavriliakNegami::new(1.0, 1.0, 0.5, -0.5).is_err());

    assert!(Cpe::new(1e-6, 0.0).is_ok());
    assert!(HavriliakNegami::new(1e4, 1e3, 1.0, 1.0).is_ok());
}
