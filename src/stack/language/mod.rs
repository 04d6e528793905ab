//! Language definitions: source extensions, manifests and dependency directories

mod dotnet;
mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;
mod rust;

pub use dotnet::DotNetLanguage;
pub use go::GoLanguage;
pub use java::JavaLanguage;
pub use javascript::{JavaScriptLanguage, TypeScriptLanguage};
pub use php::PhpLanguage;
pub use python::PythonLanguage;
pub use ruby::RubyLanguage;
pub use rust::RustLanguage;

use crate::stack::LanguageId;

pub trait LanguageDefinition: Send + Sync {
    fn id(&self) -> LanguageId;

    /// Alternative names catalog entries may use for this language
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Lowercase file extensions without the dot
    fn extensions(&self) -> &[&'static str];

    /// Files whose presence marks a project root. `*.ext` matches by suffix.
    fn manifest_files(&self) -> &[&'static str];

    /// Tools implied by a manifest found in a directory
    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &[]
    }

    /// Dependency and build output directories, never expanded by the scanner
    fn excluded_dirs(&self) -> &[&'static str] {
        &[]
    }

    /// Source files that make a directory a project root without a manifest
    fn is_entrypoint(&self, _file_name: &str) -> bool {
        false
    }

    fn can_be_container_component(&self) -> bool {
        true
    }

    /// The manifest pattern `file_name` satisfies, if any
    fn matching_manifest(&self, file_name: &str) -> Option<&'static str> {
        self.manifest_files()
            .iter()
            .copied()
            .find(|pattern| manifest_matches(pattern, file_name))
    }
}

pub fn manifest_matches(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
        None => pattern == file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_matches() {
        assert!(manifest_matches("pom.xml", "pom.xml"));
        assert!(!manifest_matches("pom.xml", "POM.xml.bak"));
        assert!(manifest_matches("*.csproj", "app.csproj"));
        assert!(!manifest_matches("*.csproj", ".csproj"));
    }

    #[test]
    fn test_matching_manifest() {
        assert_eq!(
            JavaLanguage.matching_manifest("build.gradle.kts"),
            Some("build.gradle.kts")
        );
        assert_eq!(DotNetLanguage.matching_manifest("web.csproj"), Some("*.csproj"));
        assert_eq!(GoLanguage.matching_manifest("main.go"), None);
    }
}
