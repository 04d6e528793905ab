//! Jakarta EE detector for Java

use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::java_has_group;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};

/// Platform BOM plus the Servlet, JAX-RS, JPA and CDI API groups
const GROUPS: &[&str] = &[
    "jakarta.platform",
    "jakarta.servlet",
    "jakarta.ws.rs",
    "jakarta.persistence",
    "jakarta.enterprise",
];

pub struct JakartaEeDetector;

impl FrameworkDetector for JakartaEeDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::JakartaEe
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn uses_framework(&self, config: &str) -> bool {
        GROUPS.iter().any(|group| java_has_group(config, group))
    }

    /// Jakarta EE apps take their ports from the hosting server
    fn detect_ports(&self, _component: &Component, _ctx: &DetectionContext) -> Vec<u16> {
        Vec::new()
    }
}
