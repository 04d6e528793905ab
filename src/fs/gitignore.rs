//! Nested `.gitignore` handling for the in-memory tree walk

use super::FileSystem;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use tracing::debug;

/// Matchers for every `.gitignore` between the scan root and the current directory.
///
/// Each matcher only sees paths below the directory that holds its file. The
/// deepest matcher with an opinion decides, so a nested `!pattern` can re-include
/// something an ancestor excluded.
#[derive(Default)]
pub(crate) struct IgnoreStack {
    matchers: Vec<Gitignore>,
}

impl IgnoreStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `dir/.gitignore` if present. Returns whether a matcher was pushed.
    pub fn enter(&mut self, fs: &dyn FileSystem, dir: &Path) -> bool {
        let file = dir.join(".gitignore");
        if !fs.is_file(&file) {
            return false;
        }

        let content = match fs.read_to_string(&file) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %file.display(), error = %e, "Unreadable .gitignore, skipping");
                return false;
            }
        };

        let mut builder = GitignoreBuilder::new(dir);
        for line in content.lines() {
            if let Err(e) = builder.add_line(None, line) {
                debug!(path = %file.display(), line, error = %e, "Invalid .gitignore pattern");
            }
        }

        match builder.build() {
            Ok(matcher) => {
                self.matchers.push(matcher);
                true
            }
            Err(e) => {
                debug!(path = %file.display(), error = %e, "Failed to build .gitignore matcher");
                false
            }
        }
    }

    pub fn leave(&mut self) {
        self.matchers.pop();
    }

    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        for matcher in self.matchers.iter().rev() {
            let m = matcher.matched(path, is_dir);
            if m.is_ignore() {
                return true;
            }
            if m.is_whitelist() {
                return false;
            }
        }
        false
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.matchers.len()
    }
}
