use super::{DirEntry, FileMetadata, FileSystem, FileType, VCS_DIRS};
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Disk-backed [`FileSystem`]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_of(meta: &fs::Metadata) -> FileType {
    if meta.is_file() {
        FileType::File
    } else if meta.is_dir() {
        FileType::Directory
    } else {
        FileType::Symlink
    }
}

/// Walk filter: drops VCS metadata and the children of block-listed directories.
/// The block-listed directory itself stays, so it is still reported.
fn keep_entry(entry: &ignore::DirEntry, blocked: &HashSet<String>) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
    if is_dir && VCS_DIRS.iter().any(|vcs| entry.file_name() == *vcs) {
        return false;
    }

    if entry.depth() > 1 {
        let parent = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str());
        if let Some(parent) = parent {
            return !blocked.contains(parent);
        }
    }
    true
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let meta = fs::metadata(path).context(format!("Failed to get metadata for {:?}", path))?;
        Ok(FileMetadata {
            size: meta.len(),
            file_type: kind_of(&meta),
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            // follows symlinks so a linked directory is walked like a real one
            let file_type = match fs::metadata(&path) {
                Ok(meta) => kind_of(&meta),
                Err(_) => FileType::Symlink,
            };

            result.push(DirEntry {
                path,
                name,
                file_type,
            });
        }

        Ok(result)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize()
            .context(format!("Failed to canonicalize path {:?}", path))
    }

    fn walk(&self, root: &Path, blocked: &HashSet<String>) -> Result<Vec<DirEntry>> {
        fs::read_dir(root).context(format!("Failed to read directory {:?}", root))?;

        let blocked = blocked.clone();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .parents(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| keep_entry(entry, &blocked))
            .build();

        let mut result = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let file_type = match entry.file_type() {
                Some(t) if t.is_dir() => FileType::Directory,
                Some(t) if t.is_file() => FileType::File,
                _ => FileType::Symlink,
            };
            result.push(DirEntry {
                path: entry.path().to_path_buf(),
                name: entry.file_name().to_string_lossy().to_string(),
                file_type,
            });
        }

        Ok(result)
    }
}
