//! Configuration for the demonstration binary.

use std::path::PathBuf;

/// Environment variable naming a JSON network file.
pub const NETWORK_VAR: &str = "VOYAGE_NETWORK";

/// Environment variable for the stop limit used by the demo queries.
pub const MAX_STOPS_VAR: &str = "VOYAGE_MAX_STOPS";

/// Environment variable for the time limit (days) used by the demo queries.
pub const MAX_DAYS_VAR: &str = "VOYAGE_MAX_DAYS";

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: expected {expected}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    expected: &'static str,
}

/// Settings for the demonstration binary.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Network file to load. The built-in Atlantic network is used if unset.
    pub network_path: Option<PathBuf>,

    /// Stop limit for the bounded-stops queries.
    pub max_stops: usize,

    /// Time limit in days for the bounded-time query.
    pub max_days: f64,
}

impl DemoConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(NETWORK_VAR).filter(|p| !p.is_empty()) {
            config.network_path = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup(MAX_STOPS_VAR) {
            config.max_stops = value.trim().parse().map_err(|_| ConfigError {
                var: MAX_STOPS_VAR,
                value: value.clone(),
                expected: "a whole number of stops",
            })?;
        }

        if let Some(value) = lookup(MAX_DAYS_VAR) {
            config.max_days = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|days| days.is_finite() && *days >= 0.0)
                .ok_or_else(|| ConfigError {
                    var: MAX_DAYS_VAR,
                    value: value.clone(),
                    expected: "a non-negative number of days",
                })?;
        }

        Ok(config)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            network_path: None,
            max_stops: 4,
            max_days: 25.0,
        }
    }
}
