//! Output formatting for command results
//!
//! Results are serialized as pretty JSON (default) or YAML and written to stdout
//! by the handlers; logs never go through here.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(value),
            OutputFormat::Yaml => self.format_yaml(value),
        }
    }

    fn format_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize result to JSON")
    }

    fn format_yaml<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_yaml::to_string(value).context("Failed to serialize result to YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, Language};
    use std::path::PathBuf;

    fn components() -> Vec<Component> {
        let mut go = Language::new("Go", 100.0);
        go.can_be_component = true;
        let mut component = Component::new(PathBuf::from("/repo/api"), vec![go]);
        component.ports = vec![8080];
        vec![component]
    }

    #[test]
    fn test_json_output() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&components())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "api");
        assert_eq!(parsed[0]["ports"][0], 8080);
        assert_eq!(parsed[0]["languages"][0]["canBeComponent"], true);
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_yaml_output() {
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&components())
            .unwrap();
        assert!(output.contains("name: api"));
        assert!(output.contains("- 8080"));
    }

    #[test]
    fn test_empty_list() {
        let empty: Vec<Component> = Vec::new();
        assert_eq!(
            OutputFormatter::new(OutputFormat::default())
                .format(&empty)
                .unwrap(),
            "[]"
        );
    }
}
