//! Devfile catalog matching
//!
//! Catalog entries are downloaded from a devfile registry index, narrowed to a
//! schema-version range and ranked against the languages of detected components.

pub mod catalog;
pub mod filter;
pub mod matcher;
pub mod version;

pub use catalog::{url_with_versions, CatalogClient, RegistryClient, DEFAULT_REGISTRY};
pub use filter::filter_types;
pub use matcher::{
    main_language, match_language, select_devfile_from_types, select_devfiles_from_components,
    select_devfiles_from_types,
};
pub use version::SchemaVersion;
