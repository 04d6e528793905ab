//! Vue detector for JavaScript and TypeScript

use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::dockerfile::env_ports_from_dockerfile;
use crate::extractors::parsers::env_file::port_from_env_file;
use crate::extractors::parsers::manifest::{npm_has_dependency, npm_script};
use crate::extractors::parsers::ports_from_captures;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;
use std::path::Path;

/// Scripts that start the dev server, in lookup order
pub(crate) const START_SCRIPTS: &[&str] = &["start", "dev", "serve"];

pub struct VueDetector;

impl FrameworkDetector for VueDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Vue
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::JavaScript, LanguageId::TypeScript]
    }

    fn uses_framework(&self, config: &str) -> bool {
        npm_has_dependency(config, "vue")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        vec![ApplicationFileInfo::new(component_path, "", "vue.config.js")]
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let script_port =
            Regex::new(r"(?:--port[=\s]+|PORT=)(\d+)").expect("valid regex");
        let ports = script_ports(component, ctx, &script_port);
        if !ports.is_empty() {
            return ports;
        }

        let env_line = Regex::new(r"(?m)^\s*PORT\s*=\s*(\d+)").expect("valid regex");
        if let Some(port) = port_from_env_file(ctx.fs(), &component.path, &env_line) {
            return vec![port];
        }

        let ports = env_ports_from_dockerfile(ctx.fs(), &component.path, &["PORT"]);
        if !ports.is_empty() {
            return ports;
        }

        let config_port = Regex::new(r"port\s*:\s*(\d+)").expect("valid regex");
        ctx.application_file(&self.application_file_infos(&component.path))
            .and_then(|file| ctx.read(&file))
            .map(|content| ports_from_captures(&config_port, &content, 1))
            .unwrap_or_default()
    }
}

/// Ports named in the first `package.json` start script that names any
pub(crate) fn script_ports(component: &Component, ctx: &DetectionContext, re: &Regex) -> Vec<u16> {
    let Some(manifest) = ctx.read(&component.path.join("package.json")) else {
        return Vec::new();
    };
    START_SCRIPTS
        .iter()
        .filter_map(|name| npm_script(&manifest, name))
        .map(|script| ports_from_captures(re, &script, 1))
        .find(|ports| !ports.is_empty())
        .unwrap_or_default()
}
