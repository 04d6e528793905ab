//! WebLogic detector for Java

use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::java_has_group;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};

pub struct WebLogicDetector;

impl FrameworkDetector for WebLogicDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::WebLogic
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "com.oracle.weblogic")
    }

    fn detect_ports(&self, _component: &Component, _ctx: &DetectionContext) -> Vec<u16> {
        Vec::new()
    }
}
