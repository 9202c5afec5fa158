//! Tool configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! The chart engine never reads configuration itself; callers pass these
//! values into the engine functions explicitly.

use dotenv::dotenv;
use std::env;

use crate::chord::notes::Root;
use crate::constants::parser::METADATA_SCAN_LINES;
use crate::error::{Error, Result};

/// Environment variable overriding how many lines the metadata scan reads.
pub const ENV_METADATA_LINES: &str = "CHORDSHEET_METADATA_LINES";

/// Environment variable naming the fallback key for Nashville conversion.
pub const ENV_DEFAULT_KEY: &str = "CHORDSHEET_DEFAULT_KEY";

/// Configuration for the chordsheet tool.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Lines scanned by the metadata-only parse
    pub metadata_scan_lines: usize,
    /// Key used for Nashville conversion when a chart declares none
    pub default_key: Option<String>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata_scan_lines: METADATA_SCAN_LINES,
            default_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(lines) = lookup(ENV_METADATA_LINES) {
            config.metadata_scan_lines = match lines.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!("Rejected {ENV_METADATA_LINES}={lines:?}");
                    return Err(Error::config(
                        format!("{ENV_METADATA_LINES} must be a positive number, got {lines:?}"),
                        "Unset it to use the default of 30 lines",
                    ));
                }
            };
        }

        if let Some(key) = lookup(ENV_DEFAULT_KEY) {
            let key = key.trim().to_string();
            if !key.is_empty() {
                if Root::split(&key).and_then(|(root, _)| root.index()).is_none() {
                    tracing::warn!("Rejected {ENV_DEFAULT_KEY}={key:?}");
                    return Err(Error::config(
                        format!("{ENV_DEFAULT_KEY} is not a key: {key:?}"),
                        "Use a note name such as G, Bb or F#",
                    ));
                }
                config.default_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Key to use for Nashville conversion: the chart's own, else the default.
    pub fn nashville_key(&self, declared: Option<String>) -> Option<String> {
        declared.or_else(|| self.default_key.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.metadata_scan_lines, 30);
        assert_eq!(config.default_key, None);
        assert_eq!(config.app_name(), "chordsheet");
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::from_lookup(lookup(&[(ENV_METADATA_LINES, "12"), (ENV_DEFAULT_KEY, " Bb ")]))
                .unwrap();
        assert_eq!(config.metadata_scan_lines, 12);
        assert_eq!(config.default_key.as_deref(), Some("Bb"));
    }

    #[test]
    fn test_rejects_bad_line_count() {
        for bad in ["zero", "0", "-3"] {
            let err = Config::from_lookup(lookup(&[(ENV_METADATA_LINES, bad)])).unwrap_err();
            assert!(matches!(err, Error::Config { .. }));
        }
    }

    #[test]
    fn test_rejects_bad_key() {
        let err = Config::from_lookup(lookup(&[(ENV_DEFAULT_KEY, "H")])).unwrap_err();
        assert!(err.to_string().contains(ENV_DEFAULT_KEY));
    }

    #[test]
    fn test_nashville_key_prefers_declared() {
        let config = Config::from_lookup(lookup(&[(ENV_DEFAULT_KEY, "D")])).unwrap();
        assert_eq!(config.nashville_key(Some("G".to_string())).as_deref(), Some("G"));
        assert_eq!(config.nashville_key(None).as_deref(), Some("D"));
    }
}
