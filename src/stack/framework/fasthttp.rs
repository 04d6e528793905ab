//! FastHttp detector for Go

use super::{go_address_call, scan_sources, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::go_requires;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};

pub struct FastHttpDetector;

impl FrameworkDetector for FastHttpDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::FastHttp
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Go]
    }

    fn uses_framework(&self, config: &str) -> bool {
        go_requires(config, "github.com/valyala/fasthttp")
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        scan_sources(component, ctx, &["go"], &[go_address_call(r"fasthttp\.ListenAndServe")])
    }
}
