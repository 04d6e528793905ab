//! Rust language definition

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct RustLanguage;

impl LanguageDefinition for RustLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Rust
    }

    fn extensions(&self) -> &[&'static str] {
        &["rs"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["Cargo.toml"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &["Cargo"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["target"]
    }
}
