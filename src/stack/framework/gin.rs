//! Gin detector for Go

use super::{go_address_call, scan_sources, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::go_requires;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};

pub struct GinDetector;

impl FrameworkDetector for GinDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::Gin
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Go]
    }

    fn uses_framework(&self, config: &str) -> bool {
        go_requires(config, "github.com/gin-gonic/gin")
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        scan_sources(component, ctx, &["go"], &[go_address_call(r"\.Run")])
    }
}
