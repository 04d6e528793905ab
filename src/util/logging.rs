//! Structured logging setup
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer (optionally JSON),
//! leaving stdout to command results. `RUST_LOG`, when set, replaces the
//! configured directive entirely.
//!
//! # Example
//!
//! ```no_run
//! use stackmatch::util::{init_logging, LoggingConfig};
//! use tracing::Level;
//!
//! init_logging(LoggingConfig::with_level(Level::DEBUG));
//! tracing::debug!(root = "/src", "Starting component detection");
//! ```

use crate::error::{DetectError, Result};
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events
    pub level: Level,

    /// JSON lines instead of human-readable output
    pub use_json: bool,

    /// Include the module target (e.g. `stackmatch::scan`)
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    /// Errors only, plain text, with targets
    fn default() -> Self {
        Self {
            level: Level::ERROR,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn json(mut self, use_json: bool) -> Self {
        self.use_json = use_json;
        self
    }

    fn directive(&self) -> String {
        format!("stackmatch={}", self.level)
    }
}

/// Level for a `--log` value.
///
/// An empty value means errors only. `debug`, `info` and `warning` select their
/// level; anything else is rejected.
pub fn parse_cli_level(value: &str) -> Result<Level> {
    match value.trim().to_lowercase().as_str() {
        "" => Ok(Level::ERROR),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warning" => Ok(Level::WARN),
        other => Err(DetectError::Validation(format!(
            "invalid log level '{}', expected one of: debug, info, warning",
            other
        ))),
    }
}

/// Lenient level parsing for environment configuration; unknown values fall back to ERROR
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = match env::var("RUST_LOG") {
            Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
            _ => EnvFilter::new(config.directive()),
        };

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}
