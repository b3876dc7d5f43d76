//! Low- and high-frequency limits of each element's formula

use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use zmodel_rs::element::ImpedanceElement;
use zmodel_rs::elements::{
    Capacitor, Cpe, Flw, Gerischer, HavriliakNegami, Inductor, Resistor, Warburg, Zarc,
};

const F_LOW: f64 = 1e-9;
const F_HIGH: f64 = 1e12;

#[test]
fn test_cpe_limits() {
    let cpe = Cpe::new(30.0, 0.95).unwrap();

    // |Z| grows without bound as f -> 0 and vanishes as f -> inf
    assert!(cpe.evaluate(F_LOW).norm() > 1e6);
    assert!(cpe.evaluate(F_HIGH).norm() < 1e-9);

    // Phase is frequency independent
    for f in [F_LOW, 1.0, F_HIGH] {
        assert_relative_eq!(cpe.evaluate(f).arg(), -0.95 * FRAC_PI_2, max_relative = 1e-9);
    }
}

#[test]
fn test_flw_limits() {
    let flw = Flw::new(0.01, 1.0).unwrap();

    let z = flw.evaluate(F_LOW);
    assert_relative_eq!(z.re, 0.01, max_relative = 1e-8);
    assert!(z.im.abs() < 1e-10);

    let z = flw.evaluate(F_HIGH);
    assert!(z.norm() < 1e-7);
    assert_relative_eq!(z.arg(), -FRAC_PI_4, max_relative = 1e-9);
}

#[test]
fn test_gerischer_limits() {
    let g = Gerischer::new(1.5, 0.1).unwrap();

    assert_relative_eq!(g.evaluate(F_LOW).re, 1.5, max_relative = 1e-8);

    let z = g.evaluate(F_HIGH);
    assert!(z.norm() < 1e-4);
    assert_relative_eq!(z.arg(), -FRAC_PI_4, max_relative = 1e-6);
}

#[test]
fn test_havriliak_negami_limits() {
    let hn = HavriliakNegami::new(8.0, 1e-3, 0.9, 0.8).unwrap();

    assert_relative_eq!(hn.evaluate(F_LOW).re, 8.0, max_relative = 1e-8);

    // High frequency phase approaches -alpha * beta * 90°
    let z = hn.evaluate(F_HIGH);
    assert!(z.norm() < 1e-4);
    assert_relative_eq!(z.arg(), -0.9 * 0.8 * FRAC_PI_2, max_relative = 1e-3);
}

#[test]
fn test_ideal_element_limits() {
    let r = Resistor::new(3.0).unwrap();
    assert_eq!(r.evaluate(F_LOW), r.evaluate(F_HIGH));

    let c = Capacitor::new(1.0).unwrap();
    assert!(c.evaluate(F_LOW).norm() > 1e7);
    assert!(c.evaluate(F_HIGH).norm() < 1e-12);

    let l = Inductor::new(1e-3).unwrap();
    assert!(l.evaluate(F_LOW).norm() < 1e-11);
    assert!(l.evaluate(F_HIGH).norm() > 1e9);

    let w = Warburg::new(1.0).unwrap();
    assert!(w.evaluate(F_LOW).norm() > 1e4);
    assert!(w.evaluate(F_HIGH).norm() < 1e-5);

    let zarc = Zarc::new(2.0, 1.0, 0.8).unwrap();
    assert_relative_eq!(zarc.evaluate(F_LOW).re, 2.0, max_relative = 1e-6);
    assert!(zarc.evaluate(F_HIGH).norm() < 1e-8);
}
