//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::WeekStart;
use crate::error::{FarmError, FarmResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FarmResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FarmError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `FARMBOOK_CONFIG` or the user config, falling back to defaults, then
/// apply env overrides.
///
/// A config file that fails to parse is logged and ignored.
pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
    let Some(path) = config_path() else {
        return (with_env_overrides(Config::default()), Vec::new());
    };
    if !path.exists() {
        return (with_env_overrides(Config::default()), Vec::new());
    }

    match load_with_warnings(&path) {
        Ok((config, warnings)) => {
            log::debug!("loaded config from {}", path.display());
            (with_env_overrides(config), warnings)
        }
        Err(e) => {
            log::warn!("ignoring config: {}", e);
            (with_env_overrides(Config::default()), Vec::new())
        }
    }
}

/// `FARMBOOK_CONFIG`, else `<config dir>/farmbook/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("FARMBOOK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("farmbook/config.toml"))
}

/// Apply environment variable overrides (FARMBOOK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // FARMBOOK_DATA_DIR
    if let Ok(dir) = std::env::var("FARMBOOK_DATA_DIR") {
        if !dir.trim().is_empty() {
            config.storage.data_dir = Some(PathBuf::from(dir));
        }
    }

    // FARMBOOK_WEEK_START
    if let Ok(value) = std::env::var("FARMBOOK_WEEK_START") {
        match WeekStart::parse(&value) {
            Some(week_start) => config.calendar.week_start = week_start,
            None => log::warn!("ignoring FARMBOOK_WEEK_START='{}'", value),
        }
    }

    // FARMBOOK_LATENCY_MS
    if let Ok(value) = std::env::var("FARMBOOK_LATENCY_MS") {
        match value.trim().parse::<u64>() {
            Ok(ms) => config.services.latency_ms = Some(ms),
            Err(_) => log::warn!("ignoring FARMBOOK_LATENCY_MS='{}'", value),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "calendar",
        "week_start",
        "max_events_per_cell",
        "upcoming_limit",
        "services",
        "latency_ms",
        "base_url",
        "location",
        "latitude",
        "longitude",
        "forecast_days",
        "advisor",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
