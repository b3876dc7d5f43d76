//! Integration tests for the parameter system
//!
//! These tests verify bounds enforcement through the public element API.

// Tests for positional and named parameter access
mod accessor_tests;

// Tests for the bounds contract of every element kind
mod bounds_tests;
