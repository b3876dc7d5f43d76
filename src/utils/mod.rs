//! Utility functions and helpers for the zmodel-rs library.

#[cfg(feature = "parallel")]
pub mod parallel;

// Parallel implementations
#[cfg(feature = "parallel")]
pub use parallel::{evaluate_elements_parallel, evaluate_parallel};
