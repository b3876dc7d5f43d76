//! Integration tests for the built-in elements

// Known limits at very low and very high frequency
mod asymptotic_tests;

// Concrete reference values
mod scenario_tests;
