//! Component boundary resolution

use crate::error::Result;
use crate::extractors::parsers::dockerfile::is_container_file;
use crate::model::{Component, Language};
use crate::scan::{ScanEntry, ScanSession};
use crate::stack::{LanguageClassifier, StackRegistry};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Groups a scanned tree into component roots.
///
/// Candidates are the scan root plus every directory directly holding a manifest
/// or a container build file. A candidate qualifies when one of its languages can
/// be a component on its own, or can be containerized and a container build file
/// sits in the directory. Qualifying directories with a qualifying descendant are
/// dropped so that only the most specific root on each path survives.
pub struct ComponentResolver {
    registry: Arc<StackRegistry>,
    classifier: Arc<dyn LanguageClassifier>,
}

struct Candidate {
    dir: PathBuf,
    languages: Vec<Language>,
    has_container_file: bool,
}

impl Candidate {
    fn qualifies(&self) -> bool {
        self.languages.iter().any(|l| {
            l.can_be_component || (l.can_be_container_component && self.has_container_file)
        })
    }
}

impl ComponentResolver {
    pub fn new(registry: Arc<StackRegistry>, classifier: Arc<dyn LanguageClassifier>) -> Self {
        Self {
            registry,
            classifier,
        }
    }

    pub fn resolve(&self, session: &ScanSession, root: &Path) -> Result<Vec<Component>> {
        let root = session.scanner().resolve_root(root)?;
        let entries = session.paths(&root)?;

        let (dirs, container_dirs) = self.candidate_dirs(&root, &entries);
        debug!(candidates = dirs.len(), "Collected candidate directories");

        let candidates = dirs
            .into_par_iter()
            .map(|dir| {
                let files: Vec<PathBuf> = entries
                    .iter()
                    .filter(|e| !e.is_dir && e.path.starts_with(&dir))
                    .map(|e| e.path.clone())
                    .collect();
                let languages = self.classifier.analyze(&dir, &files)?;
                let has_container_file = container_dirs.contains(&dir);
                Ok(Candidate {
                    dir,
                    languages,
                    has_container_file,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let qualifying: Vec<Candidate> = candidates.into_iter().filter(Candidate::qualifies).collect();

        let components: Vec<Component> = qualifying
            .iter()
            .filter(|c| {
                let nested = qualifying
                    .iter()
                    .any(|other| other.dir != c.dir && other.dir.starts_with(&c.dir));
                if nested {
                    debug!(dir = %c.dir.display(), "Dropping candidate with a nested component");
                }
                !nested
            })
            .map(|c| Component::new(c.dir.clone(), c.languages.clone()))
            .collect();

        info!(
            root = %root.display(),
            components = components.len(),
            "Component boundaries resolved"
        );
        Ok(components)
    }

    /// Candidate directories in scan order (root first) and the subset holding a container build file
    fn candidate_dirs(&self, root: &Path, entries: &[ScanEntry]) -> (Vec<PathBuf>, HashSet<PathBuf>) {
        let mut marked: HashSet<PathBuf> = HashSet::new();
        let mut container_dirs: HashSet<PathBuf> = HashSet::new();

        for entry in entries.iter().filter(|e| !e.is_dir) {
            let name = entry.file_name();
            let is_container = is_container_file(name);
            if !is_container
                && !self.registry.is_manifest(name)
                && !self.registry.is_entrypoint(name)
            {
                continue;
            }
            if let Some(parent) = entry.path.parent() {
                marked.insert(parent.to_path_buf());
                if is_container {
                    container_dirs.insert(parent.to_path_buf());
                }
            }
        }

        let mut dirs = vec![root.to_path_buf()];
        dirs.extend(
            entries
                .iter()
                .filter(|e| e.is_dir && marked.contains(&e.path))
                .map(|e| e.path.clone()),
        );
        (dirs, container_dirs)
    }
}
