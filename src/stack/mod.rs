//! Language and framework knowledge used by component detection.
//!
//! Identifiers are closed enums ([`LanguageId`], [`FrameworkId`]) generated by
//! `define_id_enum!`. Language definitions describe source extensions, manifests and
//! dependency directories; framework detectors tag languages from manifest content
//! and resolve listening ports. Both are registered into a [`StackRegistry`] once
//! at startup and shared read-only afterwards.
//!
//! # Example
//!
//! ```no_run
//! use stackmatch::stack::{LanguageId, StackRegistry};
//!
//! let registry = StackRegistry::with_defaults();
//! let go = registry.get_language(LanguageId::Go).unwrap();
//! assert!(go.manifest_files().contains(&"go.mod"));
//!
//! for detector in registry.frameworks_for_language(LanguageId::Java) {
//!     println!("{}", detector.id());
//! }
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod classifier;
pub mod framework;
pub mod framework_id;
pub mod language;
pub mod language_id;
pub mod registry;

pub use classifier::{ExtensionClassifier, LanguageClassifier};
pub use framework::FrameworkDetector;
pub use framework_id::FrameworkId;
pub use language::LanguageDefinition;
pub use language_id::LanguageId;
pub use registry::StackRegistry;
