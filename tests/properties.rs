//! Property tests for farmbook.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants of the calendar math and record collections.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/calendar.rs"]
mod calendar;

#[path = "properties/record_manager.rs"]
mod record_manager;
