//! Flask detector for Python

use super::{env_ports, scan_sources, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::python_requires;
use crate::extractors::parsers::ports_from_captures;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;
use std::path::Path;

pub struct FlaskDetector;

impl FrameworkDetector for FlaskDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Flask
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Python]
    }

    fn uses_framework(&self, config: &str) -> bool {
        python_requires(config, "flask")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        vec![ApplicationFileInfo::new(component_path, "", ".flaskenv")]
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let ports = env_ports(component, ctx, &["FLASK_RUN_PORT"]);
        if !ports.is_empty() {
            return ports;
        }

        let flaskenv = Regex::new(r"(?m)^\s*FLASK_RUN_PORT\s*=\s*(\d+)").expect("valid regex");
        let ports = ctx
            .application_file(&self.application_file_infos(&component.path))
            .and_then(|file| ctx.read(&file))
            .map(|content| ports_from_captures(&flaskenv, &content, 1))
            .unwrap_or_default();
        if !ports.is_empty() {
            return ports;
        }

        let run_call = Regex::new(r"\.run\([^)]*port\s*=\s*(\d+)").expect("valid regex");
        scan_sources(component, ctx, &["py"], &[run_call])
    }
}
