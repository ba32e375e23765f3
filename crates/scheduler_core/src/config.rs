//! Scheduler configuration.
//!
//! # Responsibility
//! - Collect the knobs shared by every presentation layer.
//! - Normalize user-supplied option strings into typed values.
//!
//! # Invariants
//! - A `SchedulerConfig` returned by `from_options` is always valid.

use crate::slot::DEFAULT_SLOT_KEY;
use crate::view::filter::{FilterMode, WeekStart};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Name of the durable slot holding the event list.
    pub slot_key: String,
    pub week_start: WeekStart,
    pub default_mode: FilterMode,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            week_start: WeekStart::default(),
            default_mode: FilterMode::default(),
            log_level: default_log_level(),
        }
    }
}

/// Raw, optional option strings (CLI flags, env, etc.).
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions<'a> {
    pub slot_key: Option<&'a str>,
    pub week_start: Option<&'a str>,
    pub default_mode: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl SchedulerConfig {
    /// Builds a config from optional strings, falling back to defaults.
    ///
    /// # Errors
    /// Returns a human-readable message for the first invalid option.
    pub fn from_options(options: &ConfigOptions<'_>) -> Result<Self, String> {
        let defaults = Self::default();

        let slot_key = match options.slot_key {
            Some(key) => normalize_slot_key(key)?,
            None => defaults.slot_key,
        };
        let week_start = match options.week_start {
            Some(value) => normalize_week_start(value)?,
            None => defaults.week_start,
        };
        let default_mode = match options.default_mode {
            Some(value) => normalize_filter_mode(value)?,
            None => defaults.default_mode,
        };
        let log_level = match options.log_level {
            Some(value) => normalize_log_level(value)?,
            None => defaults.log_level,
        };

        Ok(Self {
            slot_key,
            week_start,
            default_mode,
            log_level,
        })
    }
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub fn normalize_log_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Parses `sunday|sun|monday|mon`, case-insensitive.
pub fn normalize_week_start(value: &str) -> Result<WeekStart, String> {
    value.parse::<WeekStart>().map_err(|err| err.to_string())
}

/// Parses `week|month`, case-insensitive.
pub fn normalize_filter_mode(value: &str) -> Result<FilterMode, String> {
    value.parse::<FilterMode>().map_err(|err| err.to_string())
}

pub fn normalize_slot_key(key: &str) -> Result<String, String> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err("slot key cannot be empty".to_string());
    }
    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(format!("slot key `{trimmed}` must not contain path components"));
    }
    Ok(trimmed.to_string())
}
