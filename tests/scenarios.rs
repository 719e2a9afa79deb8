//! End-to-end scenarios: several commands in sequence against one store.
//!
//! Run with: `cargo test --test scenarios`

mod common;

#[path = "scenarios/first_season.rs"]
mod first_season;
