//! Common test utilities for farmbook CLI and scenario tests.
//!
//! This module provides:
//! - `FarmEnv`: an isolated data directory plus helpers to run the binary
//! - Assertion macros: `assert_output_contains!`, `assert_output_not_contains!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use env::*;
