//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default tracing filter when `LOG_FILTER` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors for malformed environment values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` env-filter directive
    /// Example: info,campusly=debug
    pub log_filter: Option<String>,

    /// Whether responses are brotli/gzip compressed
    pub enable_compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("LOG_FILTER").filter(|v| !v.trim().is_empty());
        let enable_compression = match lookup("ENABLE_COMPRESSION") {
            Some(value) => parse_bool("ENABLE_COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter,
            enable_compression,
        })
    }

    /// Check if a log filter is configured
    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    /// Configured filter or the default
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            enable_compression: true,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(!config.has_log_filter());
        assert_eq!(config.log_filter_or_default(), "info");
        assert!(config.enable_compression);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_FILTER", "info,campusly=debug"),
            ("ENABLE_COMPRESSION", "false"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter.as_deref(), Some("info,campusly=debug"));
        assert_eq!(config.log_filter_or_default(), "info,campusly=debug");
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_blank_log_filter_treated_as_unset() {
        let config = Config::from_lookup(lookup(&[("LOG_FILTER", "   ")])).unwrap();
        assert!(!config.has_log_filter());
    }

    #[test]
    fn test_bool_spellings() {
        for (value, expected) in [("1", true), ("YES", true), ("on", true), ("0", false), ("No", false)] {
            let config =
                Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", value)])).unwrap();
            assert_eq!(config.enable_compression, expected, "{value}");
        }
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let err = Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", "maybe")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "ENABLE_COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("ENABLE_COMPRESSION"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only check it does not panic
        let _ = Config::from_env();
    }
}
