//! Shared state handed to framework detectors

use super::env_vars::EnvSource;
use crate::fs::FileSystem;
use crate::model::ApplicationFileInfo;
use crate::scan::ScanSession;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a detector may look at while resolving ports for one component:
/// the scan session (and through it the file system) plus the environment.
#[derive(Clone, Copy)]
pub struct DetectionContext<'a> {
    pub session: &'a ScanSession,
    pub env: &'a dyn EnvSource,
}

impl<'a> DetectionContext<'a> {
    pub fn new(session: &'a ScanSession, env: &'a dyn EnvSource) -> Self {
        Self { session, env }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.session.fs()
    }

    /// File contents, or `None` when the file is missing or unreadable
    pub fn read(&self, path: &Path) -> Option<String> {
        match self.fs().read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No evidence from file");
                None
            }
        }
    }

    /// First existing application file among `infos`.
    ///
    /// Exact `root/dir/file` locations are tried first. After that any scanned file
    /// below `root` with the same name whose parent ends with `dir` is accepted.
    pub fn application_file(&self, infos: &[ApplicationFileInfo]) -> Option<PathBuf> {
        if let Some(path) = infos
            .iter()
            .map(ApplicationFileInfo::path)
            .find(|p| self.fs().is_file(p))
        {
            return Some(path);
        }

        for info in infos {
            let Ok(files) = self.session.files_under(&info.root) else {
                continue;
            };
            let found = files.into_iter().find(|f| {
                f.file_name().and_then(|n| n.to_str()) == Some(info.file.as_str())
                    && f.parent()
                        .map(|p| info.dir.is_empty() || p.ends_with(&info.dir))
                        .unwrap_or(false)
            });
            if found.is_some() {
                return found;
            }
        }
        None
    }

    /// Scanned files below `root` whose extension is one of `extensions`
    pub fn source_files(&self, root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
        self.session
            .files_under(root)
            .unwrap_or_default()
            .into_iter()
            .filter(|f| {
                f.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
                    .unwrap_or(false)
            })
            .collect()
    }
}
