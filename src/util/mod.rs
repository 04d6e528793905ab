//! Shared helpers

pub mod logging;

pub use logging::{init_logging, parse_cli_level, parse_level, LoggingConfig};
