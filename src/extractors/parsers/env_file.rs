//! .env file parsing utilities

use super::ports_from_captures;
use crate::fs::FileSystem;
use regex::Regex;
use std::path::Path;

/// First valid port in `<root>/.env` captured by `pattern`
pub fn port_from_env_file(fs: &dyn FileSystem, root: &Path, pattern: &Regex) -> Option<u16> {
    let content = fs.read_to_string(&root.join(".env")).ok()?;
    ports_from_captures(pattern, &content, 1).into_iter().next()
}
