//! FileSystem trait used by the scanner, classifier and port detectors

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Version control metadata directories, never walked
pub const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Size and kind of a file system entry
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub file_type: FileType,
}

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

impl FileMetadata {
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn len(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Read-only view of a source tree.
///
/// Every read performed during detection goes through this trait so the whole
/// pipeline can run against [`super::MockFileSystem`] in tests.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn metadata(&self, path: &Path) -> Result<FileMetadata>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List directory contents. Order is unspecified.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Every entry below `root` in depth-first name order, directories before
    /// their contents.
    ///
    /// `.gitignore` files inside the tree are honoured and [`VCS_DIRS`] are
    /// skipped. A directory whose name is in `blocked` is reported but its
    /// contents are not.
    fn walk(&self, root: &Path, blocked: &HashSet<String>) -> Result<Vec<DirEntry>>;
}
