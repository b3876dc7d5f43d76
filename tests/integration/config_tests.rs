//! Building elements from serialized descriptions

use zmodel_rs::config::ElementConfig;
use zmodel_rs::element::{ElementKind, ImpedanceElement};
use zmodel_rs::elements::Cpe;
use zmodel_rs::error::{Result, ZModelError};
use zmodel_rs::parameters::ValidationError;

#[test]
fn test_build_from_json() -> Result<()> {
    let json = r#"{
        "kind": "R_HN",
        "parameters": { "R": 1.0, "tau": 1.0, "alpha": 1.0, "beta": 1.0 }
    }"#;

    let element = ElementConfig::from_json(json)?.build()?;
    assert_eq!(element.kind(), ElementKind::HavriliakNegami);
    assert_eq!(
        element.parameter_values(),
        vec![("R", 1.0), ("tau", 1.0), ("alpha", 1.0), ("beta", 1.0)]
    );

    Ok(())
}

#[test]
fn test_config_round_trip_preserves_evaluation() -> Result<()> {
    let mut cpe = Cpe::default();
    cpe.set_alpha(0.72)?;

    let json = cpe.to_config().to_json()?;
    let rebuilt = ElementConfig::from_json(&json)?.build()?;

    for f in [1e-2, 1.0, 1e4] {
        assert_eq!(rebuilt.evaluate(f), cpe.evaluate(f));
    }

    Ok(())
}

#[test]
fn test_every_kind_round_trips_through_config() -> Result<()> {
    for kind in ElementKind::ALL {
        let element = kind.default_element();
        let rebuilt = element.to_config().build()?;

        assert_eq!(rebuilt.kind(), kind);
        assert_eq!(rebuilt.parameter_values(), element.parameter_values());
    }

    Ok(())
}

#[test]
fn test_invalid_configs() {
    let err = ElementConfig::from_json(r#"{ "kind": "CPE", "parameters": { "alpha": 1.5 } }"#)
        .and_then(|config| config.build())
        .unwrap_err();
    assert!(matches!(
        err,
        ZModelError::Validation(ValidationError::OutOfBounds { name: "alpha", .. })
    ));
    assert!(err.to_string().contains("alpha"));

    let err = ElementConfig::new(ElementKind::Resistor)
        .with_parameter("C", 1.0)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ZModelError::Validation(ValidationError::UnknownParameter { .. })
    ));

    assert!(ElementConfig::from_json("not json").is_err());
}

#[test]
fn test_kind_parses_from_symbol() -> Result<()> {
    let kind: ElementKind = "FLW".parse()?;
    assert_eq!(kind, ElementKind::Flw);
    assert_eq!(kind.default_element().parameter_names(), vec!["Z0", "tau"]);

    assert!("flw".parse::<ElementKind>().is_err());
    Ok(())
}
