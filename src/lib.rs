//! # zmodel-rs
//!
//! `zmodel-rs` models equivalent-circuit elements used in electrochemical
//! impedance spectroscopy. Each element computes a complex impedance as a
//! function of excitation frequency from a small set of named, bounded
//! physical parameters.
//!
//! The library provides:
//! - A bounded, positional parameter system with named access
//! - The [`ImpedanceElement`] trait, with scalar, array and parallel evaluation
//! - Constant phase, finite-length Warburg, Gerischer and Havriliak-Negami
//!   elements, plus ideal R, C, L, semi-infinite Warburg and R‖CPE
//! - Serializable element descriptions and evaluated spectra
//!
//! ## Basic Usage
//!
//! ```
//! use ndarray::array;
//! use zmodel_rs::element::ImpedanceElement;
//! use zmodel_rs::elements::Cpe;
//!
//! let mut cpe = Cpe::new(30.0, 0.95).unwrap();
//!
//! // Single frequency
//! let z = cpe.evaluate(1.0);
//! assert!(z.im < 0.0);
//!
//! // Array of frequencies, element-wise
//! let zs = cpe.evaluate_array(&array![1.0, 10.0]);
//! assert_eq!(zs[0], z);
//!
//! // Bounds are enforced on every update
//! assert!(cpe.set_alpha(1.5).is_err());
//! cpe.set_alpha(0.8).unwrap();
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

pub mod config;
pub mod element;
pub mod elements;
pub mod frequency;
pub mod spectrum;

pub mod utils;

// Re-exports for convenience
pub use config::ElementConfig;
pub use element::{ElementKind, ImpedanceElement};
pub use error::{Result, ZModelError};
pub use parameters::{ParameterAccess, ParameterVector, ValidationError};
pub use spectrum::Spectrum;

/// Complex impedance type used throughout the crate
pub use num_complex::Complex64;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
