//! Runtime configuration
//!
//! Settings are loaded from environment variables with defaults; command-line
//! flags override them where both exist.
//!
//! # Environment Variables
//!
//! - `STACKMATCH_REGISTRY`: Devfile registry base URL - default: "https://registry.devfile.io/"
//! - `STACKMATCH_LOG_LEVEL`: Logging level - default: "error"
//! - `STACKMATCH_LOG_JSON`: Emit JSON log lines (true|false) - default: "false"
//! - `STACKMATCH_HTTP_TIMEOUT`: Registry request timeout in seconds - default: "30"
//!
//! # Example
//!
//! ```no_run
//! use stackmatch::StackmatchConfig;
//!
//! let config = StackmatchConfig::from_env().expect("invalid configuration");
//! println!("{}", config.registry);
//! ```

use crate::devfile::DEFAULT_REGISTRY;
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "error";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const MAX_HTTP_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackmatchConfig {
    /// Devfile registry base URL
    pub registry: String,
    pub log_level: String,
    pub log_json: bool,
    /// Timeout for registry requests, in seconds
    pub http_timeout_secs: u64,
}

impl Default for StackmatchConfig {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl StackmatchConfig {
    /// Loads settings from `STACKMATCH_*` variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` when a numeric or boolean variable
    /// cannot be parsed, and `ConfigError::ValidationFailed` when the result
    /// does not validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let registry = env::var("STACKMATCH_REGISTRY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.registry);

        let log_level = env::var("STACKMATCH_LOG_LEVEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_lowercase())
            .unwrap_or(defaults.log_level);

        let log_json = match env::var("STACKMATCH_LOG_JSON") {
            Ok(v) if !v.trim().is_empty() => {
                v.trim()
                    .parse::<bool>()
                    .map_err(|e| ConfigError::ParseError {
                        field: "STACKMATCH_LOG_JSON".to_string(),
                        error: e.to_string(),
                    })?
            }
            _ => defaults.log_json,
        };

        let http_timeout_secs = match env::var("STACKMATCH_HTTP_TIMEOUT") {
            Ok(v) if !v.trim().is_empty() => {
                v.trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::ParseError {
                        field: "STACKMATCH_HTTP_TIMEOUT".to_string(),
                        error: e.to_string(),
                    })?
            }
            _ => defaults.http_timeout_secs,
        };

        let config = Self {
            registry,
            log_level,
            log_json,
            http_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for a zero or excessive timeout,
    /// a registry URL without an HTTP scheme, or an unknown log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "HTTP timeout must be at least 1 second".to_string(),
            ));
        }
        if self.http_timeout_secs > MAX_HTTP_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(
                "HTTP timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if !(self.registry.starts_with("http://") || self.registry.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed(format!(
                "Registry URL must start with http:// or https://: {}",
                self.registry
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "warning" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl fmt::Display for StackmatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stackmatch Configuration:")?;
        writeln!(f, "  Registry: {}", self.registry)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        writeln!(f, "  HTTP Timeout: {}s", self.http_timeout_secs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Sets or clears a variable for the lifetime of the guard
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn clear_all() -> Vec<EnvGuard> {
        vec![
            EnvGuard::unset("STACKMATCH_REGISTRY"),
            EnvGuard::unset("STACKMATCH_LOG_LEVEL"),
            EnvGuard::unset("STACKMATCH_LOG_JSON"),
            EnvGuard::unset("STACKMATCH_HTTP_TIMEOUT"),
        ]
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        let _guards = clear_all();

        let config = StackmatchConfig::from_env().unwrap();
        assert_eq!(config, StackmatchConfig::default());
        assert_eq!(config.registry, DEFAULT_REGISTRY);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = clear_all();
        let _set = vec![
            EnvGuard::set("STACKMATCH_REGISTRY", "http://localhost:8080"),
            EnvGuard::set("STACKMATCH_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("STACKMATCH_LOG_JSON", "true"),
            EnvGuard::set("STACKMATCH_HTTP_TIMEOUT", "5"),
        ];

        let config = StackmatchConfig::from_env().unwrap();
        assert_eq!(config.registry, "http://localhost:8080");
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout() {
        let _guards = clear_all();
        let _set = EnvGuard::set("STACKMATCH_HTTP_TIMEOUT", "soon");

        let err = StackmatchConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref field, .. } if field == "STACKMATCH_HTTP_TIMEOUT"));
    }

    #[test]
    fn test_validation() {
        let mut config = StackmatchConfig::default();
        assert!(config.validate().is_ok());

        config.http_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = StackmatchConfig::default();
        config.registry = "registry.devfile.io".to_string();
        assert!(config.validate().is_err());

        let mut config = StackmatchConfig::default();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_display() {
        let display = StackmatchConfig::default().to_string();
        assert!(display.contains("Stackmatch Configuration:"));
        assert!(display.contains("Registry: https://registry.devfile.io/"));
    }
}
