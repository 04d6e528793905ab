//! Quarkus detector for Java

use super::{env_ports, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::config::{
    is_yaml, parse_properties, property_port, yaml_documents, yaml_lookup, yaml_port,
};
use crate::extractors::parsers::manifest::java_has_group;
use crate::extractors::parsers::push_unique;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use std::path::Path;

const ENV_PORTS: &[&str] = &["QUARKUS_HTTP_PORT", "QUARKUS_HTTP_SSL_PORT"];
const HTTP_PORT: &str = "quarkus.http.port";
const SSL_PORT: &str = "quarkus.http.ssl-port";
const INSECURE_REQUESTS: &str = "quarkus.http.insecure-requests";

pub struct QuarkusDetector;

impl FrameworkDetector for QuarkusDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Quarkus
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "io.quarkus")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        ["application.properties", "application.yml", "application.yaml"]
            .iter()
            .map(|file| ApplicationFileInfo::new(component_path, "src/main/resources", file))
            .collect()
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let ports = env_ports(component, ctx, ENV_PORTS);
        if !ports.is_empty() {
            return ports;
        }

        let Some(file) = ctx.application_file(&self.application_file_infos(&component.path)) else {
            return Vec::new();
        };
        let Some(content) = ctx.read(&file) else {
            return Vec::new();
        };

        let mut ports = Vec::new();
        if is_yaml(&file) {
            for doc in yaml_documents(&content) {
                let insecure_disabled = yaml_lookup(&doc, INSECURE_REQUESTS)
                    .and_then(|v| v.as_str())
                    .map(|v| v.eq_ignore_ascii_case("disabled"))
                    .unwrap_or(false);
                collect(
                    &mut ports,
                    yaml_port(&doc, HTTP_PORT),
                    yaml_port(&doc, SSL_PORT),
                    insecure_disabled,
                );
            }
        } else {
            let props = parse_properties(&content);
            let insecure_disabled = props
                .get(INSECURE_REQUESTS)
                .map(|v| v.eq_ignore_ascii_case("disabled"))
                .unwrap_or(false);
            collect(
                &mut ports,
                property_port(&props, HTTP_PORT),
                property_port(&props, SSL_PORT),
                insecure_disabled,
            );
        }
        ports
    }
}

/// The plain HTTP port is dropped when insecure requests are disabled
fn collect(ports: &mut Vec<u16>, http: Option<u16>, ssl: Option<u16>, insecure_disabled: bool) {
    if let Some(port) = http.filter(|_| !insecure_disabled) {
        push_unique(ports, port);
    }
    if let Some(port) = ssl {
        push_unique(ports, port);
    }
}
