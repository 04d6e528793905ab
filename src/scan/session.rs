use super::scanner::{ScanEntry, TreeScanner};
use crate::error::Result;
use crate::fs::FileSystem;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Scan results for one top-level invocation.
///
/// Each root is walked at most once; later lookups for the same root, or for any
/// directory below an already scanned root, are served from memory.
pub struct ScanSession {
    scanner: TreeScanner,
    cache: RwLock<HashMap<PathBuf, Arc<[ScanEntry]>>>,
}

impl ScanSession {
    pub fn new(scanner: TreeScanner) -> Self {
        Self {
            scanner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn scanner(&self) -> &TreeScanner {
        &self.scanner
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.scanner.fs().as_ref()
    }

    pub fn paths(&self, root: &Path) -> Result<Arc<[ScanEntry]>> {
        let root = self.scanner.resolve_root(root)?;

        if let Some(cached) = self.cache.read().unwrap().get(&root) {
            debug!(root = %root.display(), "Scan cache hit");
            return Ok(Arc::clone(cached));
        }

        let entries: Arc<[ScanEntry]> = self.scanner.scan(&root)?.into();
        self.cache
            .write()
            .unwrap()
            .insert(root, Arc::clone(&entries));
        Ok(entries)
    }

    /// Files below `dir`, taken from the cached scan of an enclosing root when one exists
    pub fn files_under(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let covering = {
            let cache = self.cache.read().unwrap();
            cache
                .iter()
                .filter(|(root, _)| dir.starts_with(root))
                .max_by_key(|(root, _)| root.components().count())
                .map(|(_, entries)| Arc::clone(entries))
        };

        let entries = match covering {
            Some(entries) => entries,
            None => self.paths(dir)?,
        };

        Ok(entries
            .iter()
            .filter(|e| !e.is_dir && e.path.starts_with(dir))
            .map(|e| e.path.clone())
            .collect())
    }

    pub fn cached_roots(&self) -> usize {
        self.cache.read().unwrap().len()
    }
}
