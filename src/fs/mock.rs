use super::gitignore::IgnoreStack;
use super::{DirEntry, FileMetadata, FileSystem, FileType, VCS_DIRS};
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
}

/// In-memory [`FileSystem`] rooted at `/mock` unless told otherwise.
///
/// Relative paths passed to any method are resolved against the root.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root,
        };
        let root = fs.root.clone();
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        joined.components().collect()
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }

    fn entry(&self, path: &Path) -> Option<MockEntry> {
        let path = self.normalize_path(path);
        self.files.read().unwrap().get(&path).cloned()
    }

    fn walk_dir(
        &self,
        dir: &Path,
        blocked: &HashSet<String>,
        ignores: &mut IgnoreStack,
        out: &mut Vec<DirEntry>,
    ) -> Result<()> {
        let mut children = self.read_dir(dir)?;
        children.sort_by(|a, b| a.name.cmp(&b.name));

        let pushed = ignores.enter(self, dir);

        for child in children {
            let is_dir = child.is_dir();
            if is_dir && VCS_DIRS.contains(&child.name.as_str()) {
                continue;
            }
            if ignores.is_ignored(&child.path, is_dir) {
                continue;
            }

            let descend = is_dir && !blocked.contains(&child.name);
            let path = child.path.clone();
            out.push(child);
            if descend {
                self.walk_dir(&path, blocked, ignores, out)?;
            }
        }

        if pushed {
            ignores.leave();
        }
        Ok(())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entry(path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.entry(path)
            .map(|e| e.file_type == FileType::File)
            .unwrap_or(false)
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let entry = self
            .entry(path)
            .ok_or_else(|| anyhow!("Path not found: {:?}", path))?;

        Ok(FileMetadata {
            size: entry.content.as_ref().map(|c| c.len() as u64).unwrap_or(0),
            file_type: entry.file_type,
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entry = self
            .entry(path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();

        match files.get(&path) {
            Some(entry) if entry.file_type == FileType::Directory => {}
            Some(_) => return Err(anyhow!("Not a directory: {:?}", path)),
            None => return Err(anyhow!("Directory not found: {:?}", path)),
        }

        let entries = files
            .iter()
            .filter(|(file_path, _)| file_path.parent() == Some(path.as_path()))
            .map(|(file_path, entry)| DirEntry {
                path: file_path.clone(),
                name: file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string(),
                file_type: entry.file_type,
            })
            .collect();

        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let normalized = self.normalize_path(path);
        if self.files.read().unwrap().contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(anyhow!("Path not found: {:?}", path))
        }
    }

    fn walk(&self, root: &Path, blocked: &HashSet<String>) -> Result<Vec<DirEntry>> {
        let root = self.normalize_path(root);
        let mut out = Vec::new();
        let mut ignores = IgnoreStack::new();
        self.walk_dir(&root, blocked, &mut ignores, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let fs = MockFileSystem::new();
        fs.add_file("svc/api/main.go", "package main");

        assert!(fs.is_dir(Path::new("/mock/svc")));
        assert!(fs.is_dir(Path::new("svc/api")));
        assert!(fs.is_file(Path::new("/mock/svc/api/main.go")));
        assert_eq!(
            fs.read_to_string(Path::new("svc/api/main.go")).unwrap(),
            "package main"
        );
    }

    #[test]
    fn test_read_dir_lists_direct_children() {
        let fs = MockFileSystem::new();
        fs.add_file("a/one.txt", "1");
        fs.add_file("a/b/two.txt", "22");
        fs.add_dir("a/empty");

        let mut names: Vec<String> = fs
            .read_dir(Path::new("a"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["b", "empty", "one.txt"]);
    }

    #[test]
    fn test_read_dir_on_file_fails() {
        let fs = MockFileSystem::new();
        fs.add_file("file.txt", "x");
        assert!(fs.read_dir(Path::new("file.txt")).is_err());
        assert!(fs.read_dir(Path::new("missing")).is_err());
    }

    #[test]
    fn test_walk_sorted_with_blocked_dirs() {
        let fs = MockFileSystem::new();
        fs.add_file("web/node_modules/left-pad/index.js", "");
        fs.add_file("web/app.js", "");
        fs.add_file(".git/HEAD", "ref");
        fs.add_file("README.md", "");

        let blocked: HashSet<String> = ["node_modules".to_string()].into_iter().collect();
        let names: Vec<String> = fs
            .walk(Path::new("/mock"), &blocked)
            .unwrap()
            .into_iter()
            .map(|e| e.path.strip_prefix("/mock").unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["README.md", "web", "web/app.js", "web/node_modules"]);
    }

    #[test]
    fn test_metadata_size() {
        let fs = MockFileSystem::new();
        fs.add_file("Dockerfile", "EXPOSE 80");
        assert_eq!(fs.metadata(Path::new("Dockerfile")).unwrap().len(), 9);
        assert!(fs.metadata(Path::new("nope")).is_err());
    }

    #[test]
    fn test_dot_components_are_normalized() {
        let fs = MockFileSystem::new();
        fs.add_file("./Dockerfile", "EXPOSE 80");
        assert!(fs.exists(Path::new("/mock/Dockerfile")));
        assert_eq!(
            fs.canonicalize(Path::new(".")).unwrap(),
            PathBuf::from("/mock")
        );
    }
}
