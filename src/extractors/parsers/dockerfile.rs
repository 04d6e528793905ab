//! Dockerfile / Containerfile parsing utilities

use super::{parse_port, push_unique};
use crate::error::{DetectError, Result};
use crate::fs::FileSystem;
use crate::model::EnvVar;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Container build file names in lookup order, compared case-insensitively
pub const CONTAINER_FILES: &[&str] = &["dockerfile", "containerfile"];

pub fn is_container_file(name: &str) -> bool {
    CONTAINER_FILES.contains(&name.to_lowercase().as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerfileInfo {
    /// `ENV` declarations in order, values with placeholders resolved
    pub env: Vec<EnvVar>,
    /// Valid `EXPOSE` ports in order, deduplicated
    pub ports: Vec<u16>,
}

pub fn parse(content: &str) -> DockerfileInfo {
    let placeholder = Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}|\$([A-Za-z_][A-Za-z0-9_]*)",
    )
    .expect("valid regex");

    let mut info = DockerfileInfo::default();
    let mut vars: HashMap<String, String> = HashMap::new();

    for (keyword, args) in instructions(content) {
        match keyword.as_str() {
            "ARG" => {
                for token in tokenize(&args) {
                    if let Some((name, value)) = token.split_once('=') {
                        let value = substitute(&placeholder, value, &vars);
                        vars.entry(name.to_string()).or_insert(value);
                    }
                }
            }
            "ENV" => {
                for (name, value) in env_pairs(&args) {
                    let value = substitute(&placeholder, &value, &vars);
                    vars.insert(name.clone(), value.clone());
                    match info.env.iter_mut().find(|e| e.name == name) {
                        Some(existing) => existing.value = value,
                        None => info.env.push(EnvVar { name, value }),
                    }
                }
            }
            "EXPOSE" => {
                for token in args.split_whitespace() {
                    let resolved = substitute(&placeholder, token, &vars);
                    let number = resolved.split('/').next().unwrap_or_default();
                    match parse_port(number) {
                        Some(port) => push_unique(&mut info.ports, port),
                        None => debug!(token, "Discarding invalid EXPOSE value"),
                    }
                }
            }
            _ => {}
        }
    }

    info
}

/// Subdirectories conventionally holding a component's container build files
pub const CONTAINER_FILE_DIRS: &[&str] = &["docker"];

/// Container build files for a component, nearest first.
///
/// The component root is checked first, then each of [`CONTAINER_FILE_DIRS`].
/// Other subdirectories are never searched. Within a directory `Dockerfile`
/// wins over `Containerfile`.
pub fn locate(fs: &dyn FileSystem, root: &Path) -> Vec<PathBuf> {
    let dirs = std::iter::once(root.to_path_buf())
        .chain(CONTAINER_FILE_DIRS.iter().map(|d| root.join(d)))
        .filter(|d| fs.is_dir(d));

    let mut found = Vec::new();
    for dir in dirs {
        let Ok(entries) = fs.read_dir(&dir) else {
            continue;
        };
        let mut files: Vec<(usize, PathBuf)> = entries
            .into_iter()
            .filter(|e| !e.is_dir())
            .filter_map(|e| {
                let lower = e.name.to_lowercase();
                CONTAINER_FILES
                    .iter()
                    .position(|name| *name == lower)
                    .map(|rank| (rank, e.path))
            })
            .collect();
        files.sort();
        found.extend(files.into_iter().map(|(_, path)| path));
    }
    found
}

/// `EXPOSE` ports of the nearest container build file that declares any
pub fn exposed_ports(fs: &dyn FileSystem, root: &Path) -> Vec<u16> {
    for file in locate(fs, root) {
        let Ok(content) = fs.read_to_string(&file) else {
            continue;
        };
        let ports = parse(&content).ports;
        if !ports.is_empty() {
            debug!(file = %file.display(), ?ports, "Ports found in container build file");
            return ports;
        }
    }
    Vec::new()
}

/// `ENV` declarations of the nearest container build file
pub fn env_vars_from_dockerfile(fs: &dyn FileSystem, root: &Path) -> Result<Vec<EnvVar>> {
    if !fs.is_dir(root) {
        return Err(DetectError::PathNotFound(root.to_path_buf()));
    }

    for file in locate(fs, root) {
        match fs.read_to_string(&file) {
            Ok(content) => return Ok(parse(&content).env),
            Err(e) => debug!(file = %file.display(), error = %e, "Unreadable container build file"),
        }
    }
    Ok(Vec::new())
}

/// Ports assigned through `ENV` to any of `names`, in declaration order
pub fn env_ports_from_dockerfile(fs: &dyn FileSystem, root: &Path, names: &[&str]) -> Vec<u16> {
    let mut ports = Vec::new();
    for var in env_vars_from_dockerfile(fs, root).unwrap_or_default() {
        if names.contains(&var.name.as_str()) {
            if let Some(port) = parse_port(&var.value) {
                push_unique(&mut ports, port);
            }
        }
    }
    ports
}

/// (KEYWORD, arguments) pairs with continuation lines joined and comments dropped
fn instructions(content: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if current.is_empty() && (trimmed.is_empty() || trimmed.starts_with('#')) {
            continue;
        }
        if !current.is_empty() && trimmed.starts_with('#') {
            continue;
        }

        match trimmed.strip_suffix('\\') {
            Some(head) => {
                current.push_str(head);
                current.push(' ');
            }
            None => {
                current.push_str(trimmed);
                if let Some(instruction) = split_instruction(&current) {
                    out.push(instruction);
                }
                current.clear();
            }
        }
    }
    if let Some(instruction) = split_instruction(&current) {
        out.push(instruction);
    }
    out
}

fn split_instruction(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (keyword, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    Some((keyword.to_uppercase(), args.trim().to_string()))
}

/// Both `ENV K=V K2="v 2"` and the legacy `ENV K some value` forms
fn env_pairs(args: &str) -> Vec<(String, String)> {
    let tokens = tokenize(args);
    match tokens.first() {
        Some(first) if first.contains('=') => tokens
            .iter()
            .filter_map(|t| t.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        Some(_) => {
            let (name, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
            vec![(
                name.to_string(),
                value.trim().trim_matches('"').to_string(),
            )]
        }
        None => Vec::new(),
    }
}

/// Whitespace split that keeps quoted sections together and strips the quotes
fn tokenize(args: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = args.chars();

    while let Some(ch) = chars.next() {
        match (ch, quote) {
            ('\\', _) => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ('"' | '\'', None) => quote = Some(ch),
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            (c, _) => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Expands `$VAR`, `${VAR}` and `${VAR:-default}`; unknown variables stay verbatim
fn substitute(placeholder: &Regex, value: &str, vars: &HashMap<String, String>) -> String {
    placeholder.replace_all(value, |caps: &Captures| {
        let name = caps.get(1).or_else(|| caps.get(3)).map(|m| m.as_str());
        match name.and_then(|n| vars.get(n)) {
            Some(v) => v.clone(),
            None => match caps.get(2) {
                Some(default) => default.as_str().to_string(),
                None => caps[0].to_string(),
            },
        }
    })
    .into_owned()
}
