//! Data model shared by detection, port resolution and devfile matching

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Schema version every devfile filter bound must reach
pub const MIN_ALLOWED_SCHEMA_VERSION: &str = "2.0.0";

/// An independently deployable unit found in a source tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    pub path: PathBuf,
    pub languages: Vec<Language>,
    pub ports: Vec<u16>,
}

impl Component {
    pub fn new(path: PathBuf, languages: Vec<Language>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self {
            name,
            path,
            languages,
            ports: Vec::new(),
        }
    }

    /// Framework names across all languages, deduplicated in language order
    pub fn frameworks(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for fw in self.languages.iter().flat_map(|l| l.frameworks.iter()) {
            if !out.iter().any(|f| f == fw) {
                out.push(fw.clone());
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Percentage of bytes in the analyzed file set, 0..=100
    pub weight: f64,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub can_be_component: bool,
    #[serde(default)]
    pub can_be_container_component: bool,
}

impl Language {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            ..Default::default()
        }
    }

    pub fn add_framework(&mut self, name: &str) {
        if !self.frameworks.iter().any(|f| f == name) {
            self.frameworks.push(name.to_string());
        }
    }

    pub fn add_tool(&mut self, name: &str) {
        if !self.tools.iter().any(|t| t == name) {
            self.tools.push(name.to_string());
        }
    }

    /// Case-insensitive comparison against the name and every alias
    pub fn is_named(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(candidate))
    }
}

/// A catalog entry as published in the registry index
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevfileType {
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub versions: Vec<Version>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(default)]
    pub schema_version: String,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DevfileFilter {
    pub min_schema_version: Option<String>,
    pub max_schema_version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevfileScore {
    pub devfile_index: usize,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDetectionAlgorithm {
    DockerFile,
    Compose,
    Source,
}

impl PortDetectionAlgorithm {
    pub fn all() -> Vec<Self> {
        vec![Self::DockerFile, Self::Compose, Self::Source]
    }
}

impl fmt::Display for PortDetectionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::DockerFile => "docker",
            Self::Compose => "compose",
            Self::Source => "source",
        };
        f.write_str(s)
    }
}

impl FromStr for PortDetectionAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docker" | "dockerfile" => Ok(Self::DockerFile),
            "compose" => Ok(Self::Compose),
            "source" => Ok(Self::Source),
            other => Err(format!(
                "unknown port detection strategy '{}', expected docker, compose or source",
                other
            )),
        }
    }
}

/// Input for component detection
#[derive(Debug, Clone)]
pub struct DetectionSettings {
    pub base_path: PathBuf,
    /// Strategies tried in order; empty disables port detection
    pub port_detection_strategy: Vec<PortDetectionAlgorithm>,
}

impl DetectionSettings {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            port_detection_strategy: PortDetectionAlgorithm::all(),
        }
    }

    pub fn without_port_detection(mut self) -> Self {
        self.port_detection_strategy.clear();
        self
    }
}

/// Where a framework keeps a configuration file, relative to a component root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFileInfo {
    pub root: PathBuf,
    pub dir: String,
    pub file: String,
}

impl ApplicationFileInfo {
    pub fn new(root: impl Into<PathBuf>, dir: &str, file: &str) -> Self {
        Self {
            root: root.into(),
            dir: dir.to_string(),
            file: file.to_string(),
        }
    }

    pub fn path(&self) -> PathBuf {
        if self.dir.is_empty() {
            self.root.join(&self.file)
        } else {
            self.root.join(&self.dir).join(&self.file)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}
