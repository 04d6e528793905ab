//! Open Liberty detector for Java

use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::java_has_group;
use crate::extractors::parsers::{parse_port, push_unique};
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub struct OpenLibertyDetector;

impl FrameworkDetector for OpenLibertyDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::OpenLiberty
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "io.openliberty")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        vec![ApplicationFileInfo::new(
            component_path,
            "src/main/liberty/config",
            "server.xml",
        )]
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        ctx.application_file(&self.application_file_infos(&component.path))
            .and_then(|file| ctx.read(&file))
            .map(|content| server_xml_ports(&content))
            .unwrap_or_default()
    }
}

/// `httpEndpoint` ports of a Liberty `server.xml`, with `${var}` references resolved
pub fn server_xml_ports(content: &str) -> Vec<u16> {
    let doc = match roxmltree::Document::parse(content) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(error = %e, "Unparseable server.xml");
            return Vec::new();
        }
    };

    let variables: HashMap<&str, &str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("variable"))
        .filter_map(|n| {
            let name = n.attribute("name")?;
            let value = n.attribute("value").or_else(|| n.attribute("defaultValue"))?;
            Some((name, value))
        })
        .collect();

    let mut ports = Vec::new();
    for endpoint in doc.descendants().filter(|n| n.has_tag_name("httpEndpoint")) {
        for attr in ["httpPort", "httpsPort"] {
            let port = endpoint
                .attribute(attr)
                .map(|raw| resolve(raw, &variables))
                .and_then(parse_port);
            if let Some(port) = port {
                push_unique(&mut ports, port);
            }
        }
    }
    ports
}

fn resolve<'a>(raw: &'a str, variables: &HashMap<&str, &'a str>) -> &'a str {
    raw.trim()
        .strip_prefix("${")
        .and_then(|s| s.strip_suffix('}'))
        .and_then(|name| variables.get(name).copied())
        .unwrap_or(raw)
}
