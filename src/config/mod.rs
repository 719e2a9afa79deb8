//! Configuration module for farmbook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FARMBOOK_*)
//! 3. User config (`FARMBOOK_CONFIG`, else `~/.config/farmbook/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_path, ConfigWarning};
pub use types::{
    CalendarConfig, ColorMode, Config, OutputConfig, ServicesConfig, StorageConfig,
};
