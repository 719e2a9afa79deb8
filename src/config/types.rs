//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::WeekStart;
use crate::error::FarmResult;

use super::loader::{self, ConfigWarning};

/// Where the store document lives
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory holding `farmbook.json`; the platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Month calendar layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// Events shown in a day cell before `+N more`
    #[serde(default = "default_max_events_per_cell")]
    pub max_events_per_cell: usize,

    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            max_events_per_cell: default_max_events_per_cell(),
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

fn default_max_events_per_cell() -> usize {
    2
}

fn default_upcoming_limit() -> usize {
    5
}

/// Mocked remote services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicesConfig {
    /// Fixed latency for every call; typical per-call latency when unset, none when 0
    #[serde(default)]
    pub latency_ms: Option<u64>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,

    /// Offer mocked agronomic advice; `advise` falls back to the plain yield estimate when off
    #[serde(default = "default_true")]
    pub advisor: bool,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            latency_ms: None,
            base_url: default_base_url(),
            location: default_location(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            forecast_days: default_forecast_days(),
            advisor: true,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_location() -> String {
    "Moscow".to_string()
}

fn default_latitude() -> f64 {
    55.7558
}

fn default_longitude() -> f64 {
    37.6173
}

fn default_forecast_days() -> u32 {
    7
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub services: ServicesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FarmResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FarmResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the user config file, or defaults, then apply env overrides.
    pub fn load_or_default() -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (FARMBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured data directory, or the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::infrastructure::store::default_data_dir)
    }
}
