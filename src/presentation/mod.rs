//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the farm state and mocked services from configuration
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates `FarmState` and services with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use farmbook::presentation::factory;
//!
//! let clock = factory::create_clock();
//! let state = factory::create_farm_state(&config, clock)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_farm_state, ConcreteFarmState};
