//! # Parameter System
//!
//! Every impedance element is described by a small, ordered set of named
//! physical parameters. This module provides the pieces shared by all of them.
//!
//! ## Core Components
//!
//! - [`Bounds`]: Closed `[min, max]` intervals, inclusive on both ends
//! - [`ParameterSpec`]: Name, unit, default and bounds of one parameter; each
//!   element type keeps a `static` table of these
//! - [`ParameterVector`]: Fixed-size, bounds-checked storage of the current
//!   values, positionally parallel to the spec table
//! - [`ParameterAccess`]: Object-safe view used for access by name or index
//! - [`ValidationError`]: The error raised when a value is rejected
//!
//! ## Example Usage
//!
//! ```rust
//! use zmodel_rs::parameters::{ParameterAccess, ParameterSpec, ParameterVector};
//!
//! static SPECS: [ParameterSpec; 2] = [
//!     ParameterSpec::new("Q0", "S s^alpha", 30.0, 1e-6, 1e6),
//!     ParameterSpec::new("alpha", "1", 0.95, 0.0, 1.0),
//! ];
//!
//! let mut params = ParameterVector::with_defaults(&SPECS);
//! assert_eq!(params.values(), &[30.0, 0.95]);
//!
//! // Bounds are inclusive
//! params.set_named("alpha", 1.0).unwrap();
//! assert!(params.set_named("alpha", 1.5).is_err());
//!
//! // Flat update, as done by an external fitting loop
//! params.set_all(&[10.0, 0.8]).unwrap();
//! assert_eq!(params.get_named("Q0"), Some(10.0));
//! ```

pub mod bounds;
pub mod parameter;
pub mod validation;
pub mod vector;


// Re-export key types
pub use bounds::Bounds;
pub use parameter::ParameterSpec;
pub use validation::ValidationError;
pub use vector::{ParameterAccess, ParameterVector};
