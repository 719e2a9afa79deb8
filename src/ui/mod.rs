//! Terminal presentation for the `farmbook` binary.
//!
//! Views build plain strings from primitives (icons, colored text, borders)
//! and widgets (boxes, tables); commands print them or emit NDJSON instead.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
