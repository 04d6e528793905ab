//! Language classification of a directory's file set

use super::{LanguageDefinition, LanguageId, StackRegistry};
use crate::error::Result;
use crate::fs::FileSystem;
use crate::model::Language;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Turns the files below a directory into a ranked language list
pub trait LanguageClassifier: Send + Sync {
    /// Languages found among `files` (all below `dir`), heaviest first
    fn analyze(&self, dir: &Path, files: &[PathBuf]) -> Result<Vec<Language>>;
}

/// Classifies by file extension and weighs by byte size.
///
/// Manifests placed directly in `dir` mark their language as a component root,
/// contribute tools, and are handed to the registered framework detectors.
pub struct ExtensionClassifier {
    registry: Arc<StackRegistry>,
    fs: Arc<dyn FileSystem>,
}

impl ExtensionClassifier {
    pub fn new(registry: Arc<StackRegistry>, fs: Arc<dyn FileSystem>) -> Self {
        Self { registry, fs }
    }

    fn language_entry(&self, def: &dyn LanguageDefinition, weight: f64) -> Language {
        let mut language = Language::new(def.id().name(), weight);
        language.aliases = def.aliases().iter().map(|a| a.to_string()).collect();
        language.can_be_container_component = def.can_be_container_component();
        language
    }

    fn apply_manifest(&self, language: &mut Language, id: LanguageId, manifest: &Path, name: &str) {
        language.can_be_component = true;
        if let Some(def) = self.registry.get_language(id) {
            for tool in def.tools_for(name) {
                language.add_tool(tool);
            }
        }

        let content = match self.fs.read_to_string(manifest) {
            Ok(content) => content,
            Err(e) => {
                debug!(manifest = %manifest.display(), error = %e, "Unreadable manifest");
                return;
            }
        };
        for detector in self.registry.frameworks_for_language(id) {
            detector.detect_framework(language, &content);
        }
    }
}

impl LanguageClassifier for ExtensionClassifier {
    fn analyze(&self, dir: &Path, files: &[PathBuf]) -> Result<Vec<Language>> {
        let mut bytes: Vec<(LanguageId, u64)> = Vec::new();
        for file in files {
            let Some(def) = file
                .extension()
                .and_then(|e| e.to_str())
                .and_then(|e| self.registry.language_for_extension(e))
            else {
                continue;
            };
            let size = self.fs.metadata(file).map(|m| m.len()).unwrap_or(0).max(1);
            match bytes.iter_mut().find(|(id, _)| *id == def.id()) {
                Some((_, total)) => *total += size,
                None => bytes.push((def.id(), size)),
            }
        }

        let total: u64 = bytes.iter().map(|(_, b)| b).sum();
        let mut ids: Vec<LanguageId> = Vec::new();
        let mut languages: Vec<Language> = Vec::new();
        for (id, size) in &bytes {
            let Some(def) = self.registry.get_language(*id) else {
                continue;
            };
            let weight = *size as f64 * 100.0 / total as f64;
            ids.push(*id);
            languages.push(self.language_entry(def, weight));
        }

        let direct = files
            .iter()
            .filter(|f| f.parent() == Some(dir))
            .filter_map(|f| Some((f, f.file_name()?.to_str()?)));
        for (path, name) in direct {
            let owners = self.registry.languages_for_manifest(name);
            if owners.is_empty() {
                for (language, id) in languages.iter_mut().zip(&ids) {
                    let is_entrypoint = self
                        .registry
                        .get_language(*id)
                        .map(|def| def.is_entrypoint(name))
                        .unwrap_or(false);
                    if is_entrypoint {
                        language.can_be_component = true;
                    }
                }
                continue;
            }

            let present: Vec<LanguageId> = owners
                .iter()
                .map(|def| def.id())
                .filter(|id| ids.contains(id))
                .collect();
            let targets = if present.is_empty() {
                let def = owners[0];
                debug!(manifest = name, language = def.id().name(), "Manifest without sources");
                ids.push(def.id());
                languages.push(self.language_entry(def, 0.0));
                vec![def.id()]
            } else {
                present
            };

            for id in targets {
                if let Some(pos) = ids.iter().position(|i| *i == id) {
                    self.apply_manifest(&mut languages[pos], id, path, name);
                }
            }
        }

        languages.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Ok(languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn classify(fs: MockFileSystem, dir: &str, files: &[&str]) -> Vec<Language> {
        let fs = Arc::new(fs);
        let classifier = ExtensionClassifier::new(Arc::new(StackRegistry::with_defaults()), fs);
        let files: Vec<PathBuf> = files.iter().map(|f| Path::new("/mock").join(f)).collect();
        classifier.analyze(Path::new(dir), &files).unwrap()
    }

    #[test]
    fn test_weights_by_size() {
        let fs = MockFileSystem::new();
        fs.add_file("main.go", &"x".repeat(300));
        fs.add_file("web/app.js", &"x".repeat(100));
        fs.add_file("README.md", &"x".repeat(1000));

        let langs = classify(fs, "/mock", &["main.go", "web/app.js", "README.md"]);
        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].name, "Go");
        assert_eq!(langs[0].weight, 75.0);
        assert_eq!(langs[1].name, "JavaScript");
        assert_eq!(langs[1].weight, 25.0);
        assert!(!langs[0].can_be_component);
        assert!(langs[0].can_be_container_component);
    }

    #[test]
    fn test_manifest_tags_frameworks_and_tools() {
        let fs = MockFileSystem::new();
        fs.add_file("go.mod", "module app\n\nrequire github.com/gin-gonic/gin v1.9.1\n");
        fs.add_file("main.go", "package main\n");

        let langs = classify(fs, "/mock", &["go.mod", "main.go"]);
        assert_eq!(langs.len(), 1);
        assert!(langs[0].can_be_component);
        assert_eq!(langs[0].tools, vec!["Go Modules"]);
        assert_eq!(langs[0].frameworks, vec!["Gin"]);
        assert_eq!(langs[0].aliases, vec!["golang"]);
    }

    #[test]
    fn test_nested_manifest_does_not_mark_component() {
        let fs = MockFileSystem::new();
        fs.add_file("svc/go.mod", "module svc\n");
        fs.add_file("svc/main.go", "package main\n");

        let langs = classify(fs, "/mock", &["svc/go.mod", "svc/main.go"]);
        assert_eq!(langs.len(), 1);
        assert!(!langs[0].can_be_component);
    }

    #[test]
    fn test_manifest_without_sources() {
        let fs = MockFileSystem::new();
        fs.add_file("pom.xml", "<project/>");

        let langs = classify(fs, "/mock", &["pom.xml"]);
        assert_eq!(langs.len(), 1);
        assert_eq!(langs[0].name, "Java");
        assert_eq!(langs[0].weight, 0.0);
        assert!(langs[0].can_be_component);
        assert_eq!(langs[0].tools, vec!["Maven"]);
    }

    #[test]
    fn test_shared_manifest_goes_to_present_languages() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"dependencies":{"express":"4"}}"#);
        fs.add_file("index.ts", "app.listen(3000)");

        let langs = classify(fs, "/mock", &["index.ts", "package.json"]);
        assert_eq!(langs.len(), 1);
        assert_eq!(langs[0].name, "TypeScript");
        assert!(langs[0].can_be_component);
        assert_eq!(langs[0].frameworks, vec!["Express"]);
    }

    #[test]
    fn test_python_entrypoint() {
        let fs = MockFileSystem::new();
        fs.add_file("app.py", "print('hi')");
        fs.add_file("lib/util.py", "");

        let langs = classify(fs, "/mock", &["app.py", "lib/util.py"]);
        assert_eq!(langs[0].name, "Python");
        assert!(langs[0].can_be_component);
        // empty files still count one byte
        assert_eq!(langs[0].weight, 100.0);
    }

    #[test]
    fn test_no_languages() {
        let fs = MockFileSystem::new();
        fs.add_file("notes.txt", "hello");
        assert!(classify(fs, "/mock", &["notes.txt"]).is_empty());
    }
}
