//! Nuxt detector for JavaScript and TypeScript

use super::vue::script_ports;
use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::npm_has_dependency;
use crate::extractors::parsers::ports_from_captures;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;
use std::path::Path;

pub struct NuxtDetector;

impl FrameworkDetector for NuxtDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Nuxt
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::JavaScript, LanguageId::TypeScript]
    }

    fn framework_names(&self) -> Vec<&'static str> {
        vec!["Nuxt", "Nuxt.js"]
    }

    fn uses_framework(&self, config: &str) -> bool {
        npm_has_dependency(config, "nuxt")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        vec![
            ApplicationFileInfo::new(component_path, "", "nuxt.config.js"),
            ApplicationFileInfo::new(component_path, "", "nuxt.config.ts"),
        ]
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let script_port = Regex::new(r"--port[=\s]+(\d+)").expect("valid regex");
        let ports = script_ports(component, ctx, &script_port);
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
