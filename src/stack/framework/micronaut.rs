//! Micronaut detector for Java

use super::{env_ports, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::config::{yaml_bool, yaml_documents, yaml_port};
use crate::extractors::parsers::manifest::java_has_group;
use crate::extractors::parsers::push_unique;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use std::path::Path;

const ENV_PORTS: &[&str] = &["MICRONAUT_SERVER_PORT", "MICRONAUT_SERVER_SSL_PORT"];

pub struct MicronautDetector;

impl FrameworkDetector for MicronautDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Micronaut
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "io.micronaut")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        vec![
            ApplicationFileInfo::new(component_path, "src/main/resources", "application.yml"),
            ApplicationFileInfo::new(component_path, "src/main/resources", "application.yaml"),
        ]
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let ports = env_ports(component, ctx, ENV_PORTS);
        if !ports.is_empty() {
            return ports;
        }

        let Some(content) = ctx
            .application_file(&self.application_file_infos(&component.path))
            .and_then(|file| ctx.read(&file))
        else {
            return Vec::new();
        };

        let mut ports = Vec::new();
        for doc in yaml_documents(&content) {
            if let Some(port) = yaml_port(&doc, "micronaut.server.port") {
                push_unique(&mut ports, port);
            }
            if yaml_bool(&doc, "micronaut.server.ssl.enabled") {
                if let Some(port) = yaml_port(&doc, "micronaut.server.ssl.port") {
                    push_unique(&mut ports, port);
                }
            }
        }
        ports
    }
}
