//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_LOAD_LATENCY_MS, DEFAULT_PLACEHOLDER, DEFAULT_SAVE_FAILURE_RATE,
    DEFAULT_SAVE_LATENCY_MS,
};
use std::env;
use std::time::Duration;

/// Runtime configuration for the editor demo and simulated content service.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub load_latency_ms: u64,
    pub save_latency_ms: u64,
    pub save_failure_rate: f64,
    pub offline: bool,
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_latency_ms: DEFAULT_LOAD_LATENCY_MS,
            save_latency_ms: DEFAULT_SAVE_LATENCY_MS,
            save_failure_rate: DEFAULT_SAVE_FAILURE_RATE,
            offline: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a failure probability, rejecting values outside `[0, 1]`.
fn parse_failure_rate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite())
        .map(|rate| rate.clamp(0.0, 1.0))
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value for a variable name, if set.
    ///
    /// # Returns
    /// A populated [`Config`]; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            load_latency_ms: lookup("RICHEDIT_LOAD_LATENCY_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.load_latency_ms),
            save_latency_ms: lookup("RICHEDIT_SAVE_LATENCY_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.save_latency_ms),
            save_failure_rate: lookup("RICHEDIT_SAVE_FAILURE_RATE")
                .and_then(|v| parse_failure_rate(&v))
                .unwrap_or(defaults.save_failure_rate),
            offline: lookup("RICHEDIT_OFFLINE")
                .and_then(|v| parse_env_flag(&v))
                .unwrap_or(defaults.offline),
            placeholder: lookup("RICHEDIT_PLACEHOLDER")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.placeholder),
        }
    }

    /// Simulated load latency as a [`Duration`].
    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    /// Simulated save latency as a [`Duration`].
    pub fn save_latency(&self) -> Duration {
        Duration::from_millis(self.save_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_env_flag, Config};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn missing_values_use_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.load_latency_ms, 1000);
        assert_eq!(config.save_latency_ms, 800);
        assert_eq!(config.placeholder, "Start typing...");
    }

    #[test]
    fn overrides_are_parsed_and_clamped() {
        let config = Config::from_lookup(lookup_from(&[
            ("RICHEDIT_LOAD_LATENCY_MS", "5"),
            ("RICHEDIT_SAVE_LATENCY_MS", " 7 "),
            ("RICHEDIT_SAVE_FAILURE_RATE", "3.5"),
            ("RICHEDIT_OFFLINE", "yes"),
            ("RICHEDIT_PLACEHOLDER", "Write something..."),
        ]));
        assert_eq!(config.load_latency_ms, 5);
        assert_eq!(config.save_latency_ms, 7);
        assert_eq!(config.save_failure_rate, 1.0);
        assert!(config.offline);
        assert_eq!(config.placeholder, "Write something...");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("RICHEDIT_LOAD_LATENCY_MS", "soon"),
            ("RICHEDIT_SAVE_FAILURE_RATE", "NaN"),
            ("RICHEDIT_OFFLINE", "maybe"),
            ("RICHEDIT_PLACEHOLDER", "   "),
        ]));
        assert_eq!(config, Config::default());
    }
}
