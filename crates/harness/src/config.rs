//! Configuration system for the scan harness.
//!
//! This module defines the configuration structures used to parameterize a harness run.
//! It provides:
//! 1. **Defaults:** Baseline clock timing and logging behavior.
//! 2. **Structures:** Hierarchical config for general, chain, and clock settings.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Every section and field is optional; omitted values take their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::common::ChainError;

/// Default configuration constants for the harness.
mod defaults {
    /// Half of the scan clock period in nanoseconds (20 ns period).
    pub const HALF_PERIOD_NS: u64 = 10;
}

/// Root configuration for the harness.
///
/// # Examples
///
/// ```
/// use scanchain_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_shifts": true },
///     "chain": { "mapping": "adder/adder.log" },
///     "clock": { "half_period_ns": 5 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_shifts);
/// assert_eq!(config.chain.mapping.as_deref(), Some("adder/adder.log"));
/// assert_eq!(config.clock.half_period_ns, 5);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Mapping description settings
    #[serde(default)]
    pub chain: ChainConfig,
    /// Scan clock timing
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Parses configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General harness settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-pulse trace events (raises the log filter to `trace`).
    #[serde(default)]
    pub trace_shifts: bool,
}

/// Mapping description settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainConfig {
    /// Path of the `<position> <field> <bit>` description; the built-in adder mapping when unset.
    #[serde(default)]
    pub mapping: Option<String>,
}

/// Scan clock timing.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Half clock period in nanoseconds.
    #[serde(default = "ClockConfig::default_half_period_ns")]
    pub half_period_ns: u64,
}

impl ClockConfig {
    /// Returns the default half period.
    const fn default_half_period_ns() -> u64 {
        defaults::HALF_PERIOD_NS
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            half_period_ns: defaults::HALF_PERIOD_NS,
        }
    }
}
