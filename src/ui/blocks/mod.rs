pub mod error;
pub mod header;
pub mod summary;
pub mod warning;
