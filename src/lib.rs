//! stackmatch - component, port and devfile detection for source trees
//!
//! This library inspects a source tree without executing any of it and answers
//! three questions: where the independently deployable components are, which
//! ports each component exposes, and which devfile registry entries best match
//! them.
//!
//! # Example Usage
//!
//! ```no_run
//! use stackmatch::detection::DetectionService;
//! use stackmatch::devfile::{RegistryClient, DEFAULT_REGISTRY};
//! use stackmatch::model::DevfileFilter;
//! use std::time::Duration;
//!
//! # fn example() -> stackmatch::Result<()> {
//! let service = DetectionService::new();
//!
//! for component in service.detect_components("/path/to/repo")? {
//!     println!("{} at {}: {:?}", component.name, component.path.display(), component.ports);
//! }
//!
//! let client = RegistryClient::new(Duration::from_secs(30))?;
//! let devfiles = service.match_devfiles(
//!     "/path/to/repo",
//!     DEFAULT_REGISTRY,
//!     &DevfileFilter::new(Some("2.1.0"), None),
//!     &client,
//! )?;
//! println!("best match: {}", devfiles[0].name);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`scan`]: tree walking with `.gitignore` support and a per-run cache
//! - [`stack`]: language definitions, the classifier and framework detectors
//! - [`extractors`]: format parsers and the port detection pipeline
//! - [`detection`]: component boundary resolution and the service facade
//! - [`devfile`]: registry download, schema filtering and match scoring

pub mod cli;
pub mod config;
pub mod detection;
pub mod devfile;
pub mod error;
pub mod extractors;
pub mod fs;
pub mod model;
pub mod scan;
pub mod stack;
pub mod util;

pub use config::{ConfigError, StackmatchConfig};
pub use detection::{ComponentResolver, DetectionService};
pub use error::{DetectError, Result};
pub use model::{
    Component, DetectionSettings, DevfileFilter, DevfileType, Language, PortDetectionAlgorithm,
};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
