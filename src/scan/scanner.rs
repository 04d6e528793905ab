use crate::error::{DetectError, Result};
use crate::fs::{FileSystem, FileType};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl ScanEntry {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// Depth-first walk of a source tree, delegated to [`FileSystem::walk`].
///
/// Children are visited in name order and directories are reported before their
/// contents. Paths excluded by a `.gitignore` are dropped; block-listed dependency
/// directories are reported once and never expanded.
pub struct TreeScanner {
    fs: Arc<dyn FileSystem>,
    blocked_dirs: HashSet<String>,
}

impl TreeScanner {
    pub fn new(fs: Arc<dyn FileSystem>, blocked_dirs: impl IntoIterator<Item = String>) -> Self {
        Self {
            fs,
            blocked_dirs: blocked_dirs.into_iter().collect(),
        }
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    pub fn is_blocked(&self, name: &str) -> bool {
        self.blocked_dirs.contains(name)
    }

    /// Canonical form of `root`, or `PathNotFound` when it is missing or not a directory
    pub fn resolve_root(&self, root: &Path) -> Result<PathBuf> {
        let canonical = self
            .fs
            .canonicalize(root)
            .map_err(|_| DetectError::PathNotFound(root.to_path_buf()))?;
        if !self.fs.is_dir(&canonical) {
            return Err(DetectError::PathNotFound(root.to_path_buf()));
        }
        Ok(canonical)
    }

    pub fn scan(&self, root: &Path) -> Result<Vec<ScanEntry>> {
        let start = Instant::now();
        let root = self.resolve_root(root)?;

        info!(root = %root.display(), "Starting tree scan");

        let entries: Vec<ScanEntry> = match self.fs.walk(&root, &self.blocked_dirs) {
            Ok(walked) => walked
                .into_iter()
                .filter_map(|entry| match entry.file_type {
                    FileType::Directory => Some(ScanEntry {
                        path: entry.path,
                        is_dir: true,
                    }),
                    FileType::File => Some(ScanEntry {
                        path: entry.path,
                        is_dir: false,
                    }),
                    FileType::Symlink => {
                        debug!(path = %entry.path.display(), "Skipping dangling link");
                        None
                    }
                })
                .collect(),
            Err(e) => {
                debug!(root = %root.display(), error = %e, "Root is not readable");
                return Err(DetectError::PathNotFound(root));
            }
        };

        info!(
            entries = entries.len(),
            scan_time_ms = start.elapsed().as_millis() as u64,
            "Tree scan completed"
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn scanner(fs: MockFileSystem) -> TreeScanner {
        TreeScanner::new(
            Arc::new(fs),
            ["node_modules".to_string(), "vendor".to_string()],
        )
    }

    fn rel(entries: &[ScanEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| {
                e.path
                    .strip_prefix("/mock")
                    .unwrap()
                    .to_string_lossy()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_depth_first_sorted() {
        let fs = MockFileSystem::new();
        fs.add_file("b/z.go", "");
        fs.add_file("b/a.go", "");
        fs.add_file("a.txt", "");
        fs.add_file("c/d/e.txt", "");

        let entries = scanner(fs).scan(Path::new("/mock")).unwrap();
        assert_eq!(
            rel(&entries),
            vec!["a.txt", "b", "b/a.go", "b/z.go", "c", "c/d", "c/d/e.txt"]
        );
        assert!(entries[1].is_dir);
        assert!(!entries[2].is_dir);
    }

    #[test]
    fn test_blocked_dir_reported_not_expanded() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{}");
        fs.add_file("node_modules/express/index.js", "");

        let entries = scanner(fs).scan(Path::new("/mock")).unwrap();
        assert_eq!(rel(&entries), vec!["node_modules", "package.json"]);
    }

    #[test]
    fn test_vcs_dirs_skipped() {
        let fs = MockFileSystem::new();
        fs.add_file(".git/HEAD", "ref");
        fs.add_file("main.go", "");

        let entries = scanner(fs).scan(Path::new("/mock")).unwrap();
        assert_eq!(rel(&entries), vec!["main.go"]);
    }

    #[test]
    fn test_gitignore_scoped_to_subtree() {
        let fs = MockFileSystem::new();
        fs.add_file("keep.log", "");
        fs.add_file("svc/.gitignore", "*.log\nbuild/\n");
        fs.add_file("svc/app.log", "");
        fs.add_file("svc/build/out.bin", "");
        fs.add_file("svc/main.go", "");

        let entries = scanner(fs).scan(Path::new("/mock")).unwrap();
        assert_eq!(
            rel(&entries),
            vec!["keep.log", "svc", "svc/.gitignore", "svc/main.go"]
        );
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let fs = MockFileSystem::new();
        let err = scanner(fs).scan(Path::new("/mock/missing")).unwrap_err();
        assert!(matches!(err, DetectError::PathNotFound(_)));
    }

    #[test]
    fn test_file_root_is_not_found() {
        let fs = MockFileSystem::new();
        fs.add_file("main.go", "");
        let err = scanner(fs).scan(Path::new("/mock/main.go")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_real_tree_walk() {
        let temp = tempfile::TempDir::new().unwrap();
        let base = temp.path();
        std::fs::create_dir_all(base.join("api/vendor/github.com/gin")).unwrap();
        std::fs::write(base.join("api/vendor/github.com/gin/gin.go"), "").unwrap();
        std::fs::write(base.join("api/go.mod"), "module api").unwrap();
        std::fs::write(base.join("api/.gitignore"), "bin/\n").unwrap();
        std::fs::create_dir_all(base.join("api/bin")).unwrap();
        std::fs::write(base.join("api/bin/api"), "").unwrap();
        std::fs::write(base.join("README.md"), "").unwrap();

        let scanner = TreeScanner::new(
            Arc::new(crate::fs::RealFileSystem::new()),
            ["vendor".to_string()],
        );
        let root = scanner.resolve_root(base).unwrap();
        let entries = scanner.scan(base).unwrap();
        let rel: Vec<String> = entries
            .iter()
            .map(|e| e.path.strip_prefix(&root).unwrap().display().to_string())
            .collect();

        assert_eq!(
            rel,
            vec!["README.md", "api", "api/.gitignore", "api/go.mod", "api/vendor"]
        );
        assert!(entries[4].is_dir);
    }

    #[test]
    fn test_empty_tree() {
        let fs = MockFileSystem::new();
        let entries = scanner(fs).scan(Path::new("/mock")).unwrap();
        assert!(entries.is_empty());
    }
}
