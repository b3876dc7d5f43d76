//! Example evaluating impedance elements over a frequency sweep
//!
//! This example builds elements directly and from JSON descriptions, prints
//! their spectra and shows how parameter bounds are enforced.

use zmodel_rs::config::ElementConfig;
use zmodel_rs::element::{ElementKind, ImpedanceElement};
use zmodel_rs::elements::{Flw, HavriliakNegami};
use zmodel_rs::error::Result;
use zmodel_rs::frequency;
use zmodel_rs::spectrum::Spectrum;

fn print_spectrum(title: &str, spectrum: &Spectrum) {
    println!("{}", title);
    println!("{:>14} {:>14} {:>14} {:>10}", "f [Hz]", "Re Z [Ohm]", "Im Z [Ohm]", "phase [°]");
    for i in 0..spectrum.len() {
        let z = spectrum.impedance_ohm[i];
        println!(
            "{:>14.4e} {:>14.6e} {:>14.6e} {:>10.3}",
            spectrum.frequency_hz[i], z.re, z.im, spectrum.phase_deg[i]
        );
    }
    println!();
}

fn main() -> Result<()> {
    println!("Impedance element spectra");
    println!("=========================\n");

    // 1. A finite-length Warburg element over a coarse sweep
    let flw = Flw::new(10.0, 0.5)?;
    let f = frequency::log_range(1e4, 1e-2, 2)?;
    print_spectrum("1. FLW (Z0 = 10 Ohm, tau = 0.5 s)", &Spectrum::checked(&flw, &f)?);

    // 2. Elements described as data
    let json = r#"{ "kind": "R_HN", "parameters": { "R": 100.0, "tau": 1e-3, "beta": 0.6 } }"#;
    let hn = ElementConfig::from_json(json)?.build()?;
    println!("2. Built from JSON: {} {:?}", hn.kind(), hn.parameter_values());

    let spectrum = hn.spectrum(&frequency::default_range());
    let (i_min, phase_min) = spectrum
        .phase_deg
        .iter()
        .enumerate()
        .fold((0, 0.0), |acc, (i, &p)| if p < acc.1 { (i, p) } else { acc });
    println!(
        "   Phase minimum {:.2}° at {:.3e} Hz\n",
        phase_min, spectrum.frequency_hz[i_min]
    );

    // 3. Bounds are enforced on every update
    let mut hn = HavriliakNegami::default();
    match hn.set_alpha(1.2) {
        Ok(()) => println!("3. Unexpectedly accepted alpha = 1.2"),
        Err(e) => println!("3. Rejected update: {}", e),
    }
    println!("   alpha is still {}\n", hn.alpha());

    // 4. Every kind with its defaults at 1 Hz
    println!("4. Default elements at 1 Hz");
    for kind in ElementKind::ALL {
        let z = kind.default_element().evaluate(1.0);
        println!("   {:>6}: {:>12.4e} {:+.4e}j", kind, z.re, z.im);
    }

    Ok(())
}
