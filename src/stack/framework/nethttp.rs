//! Standard library `net/http` servers, the fallback for Go components without a framework

use super::{go_address_call, scan_sources, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;

pub struct NetHttpDetector;

impl FrameworkDetector for NetHttpDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::NetHttp
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Go]
    }

    /// Part of the standard library, so never declared in `go.mod`
    fn uses_framework(&self, _config: &str) -> bool {
        false
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        let patterns = [
            go_address_call(r"ListenAndServe(?:TLS)?"),
            Regex::new(r#"Addr\s*:\s*"[^"]*:(\d+)""#).expect("valid regex"),
        ];
        scan_sources(component, ctx, &["go"], &patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::stack::framework::test_support::Fixture;

    #[test]
    fn test_listen_and_serve() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "main.go",
            "package main\n\nimport \"net/http\"\n\nfunc main() {\n\thttp.ListenAndServe(\":8085\", nil)\n}\n",
        );
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(NetHttpDetector.detect_ports(&component, &fixture.ctx()), vec![8085]);
    }

    #[test]
    fn test_server_struct_addr() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "server.go",
            "srv := &http.Server{\n\tAddr:    \"localhost:9095\",\n\tHandler: mux,\n}\n",
        );
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(NetHttpDetector.detect_ports(&component, &fixture.ctx()), vec![9095]);
    }

    #[test]
    fn test_never_tagged() {
        assert!(!NetHttpDetector.uses_framework("module app\nrequire net/http v0\n"));
    }
}
