//! Express detector for JavaScript and TypeScript

use super::{scan_sources, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::dockerfile::env_ports_from_dockerfile;
use crate::extractors::parsers::env_file::port_from_env_file;
use crate::extractors::parsers::manifest::npm_has_dependency;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;

const SOURCE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "ts"];

pub struct ExpressDetector;

impl FrameworkDetector for ExpressDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Express
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::JavaScript, LanguageId::TypeScript]
    }

    fn uses_framework(&self, config: &str) -> bool {
        npm_has_dependency(config, "express")
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let ports = ctx.env.ports(&["PORT"]);
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

        let patterns = [
            Regex::new(r"\.listen\(\s*(\d+)").expect("valid regex"),
            Regex::new(r"(?i)PORT\s*\|\|\s*(\d+)").expect("valid regex"),
        ];
        scan_sources(component, ctx, SOURCE_EXTENSIONS, &patterns)
    }
}
