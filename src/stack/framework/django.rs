//! Django detector for Python

use super::{env_ports, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::dockerfile;
use crate::extractors::parsers::manifest::python_requires;
use crate::extractors::parsers::{ports_from_captures, push_unique};
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;

pub struct DjangoDetector;

impl FrameworkDetector for DjangoDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Django
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Python]
    }

    fn uses_framework(&self, config: &str) -> bool {
        python_requires(config, "django")
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let ports = env_ports(component, ctx, &["DJANGO_PORT"]);
        if !ports.is_empty() {
            return ports;
        }

        let runserver =
            Regex::new(r"runserver[\s'\x22,]+(?:[\w.\[\]]+:)?(\d+)").expect("valid regex");

        let mut files = ctx.source_files(&component.path, &["py"]);
        files.retain(|f| f.file_name().and_then(|n| n.to_str()) == Some("manage.py"));
        files.extend(dockerfile::locate(ctx.fs(), &component.path));

        let mut ports = Vec::new();
        for file in files {
            if let Some(content) = ctx.read(&file) {
                for port in ports_from_captures(&runserver, &content, 1) {
                    push_unique(&mut ports, port);
                }
            }
        }
        ports
    }
}
