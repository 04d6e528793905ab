use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary source tree built from `(relative path, content)` pairs
#[allow(dead_code)]
pub fn tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (path, content) in files {
        write(dir.path(), path, content);
    }
    dir
}

#[allow(dead_code)]
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write file");
}

#[allow(dead_code)]
pub fn canonical(dir: &TempDir) -> PathBuf {
    dir.path().canonicalize().expect("Failed to canonicalize temp dir")
}
