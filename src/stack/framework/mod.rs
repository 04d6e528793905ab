//! Framework detectors
//!
//! A detector does two things for one framework: it tags a [`Language`] when the
//! framework shows up in a build manifest, and it resolves the ports a component
//! built on that framework listens on. Port resolution follows a fixed precedence:
//! runtime environment, then the component's Dockerfile environment, then the
//! framework's configuration files, then a scan of source files.

use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::{dockerfile, ports_from_captures, push_unique};
use crate::model::{ApplicationFileInfo, Component, Language};
use crate::stack::{FrameworkId, LanguageId};
use regex::Regex;
use std::path::Path;

pub trait FrameworkDetector: Send + Sync {
    fn id(&self) -> FrameworkId;

    /// Languages whose manifests may declare this framework
    fn languages(&self) -> &[LanguageId];

    /// Names appended to [`Language::frameworks`] on detection
    fn framework_names(&self) -> Vec<&'static str> {
        vec![self.id().name()]
    }

    /// Whether manifest content declares the framework
    fn uses_framework(&self, config: &str) -> bool;

    fn detect_framework(&self, language: &mut Language, config: &str) {
        if self.uses_framework(config) {
            for name in self.framework_names() {
                language.add_framework(name);
            }
        }
    }

    /// Configuration files consulted for ports, most specific first
    fn application_file_infos(&self, _component_path: &Path) -> Vec<ApplicationFileInfo> {
        Vec::new()
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16>;
}

pub mod django;
pub mod echo;
pub mod express;
pub mod fasthttp;
pub mod flask;
pub mod gin;
pub mod jakarta_ee;
pub mod micronaut;
pub mod nethttp;
pub mod nuxt;
pub mod openliberty;
pub mod quarkus;
pub mod spring_boot;
pub mod spring_cloud;
pub mod vue;
pub mod weblogic;
pub mod websphere;

pub use django::DjangoDetector;
pub use echo::EchoDetector;
pub use express::ExpressDetector;
pub use fasthttp::FastHttpDetector;
pub use flask::FlaskDetector;
pub use gin::GinDetector;
pub use jakarta_ee::JakartaEeDetector;
pub use micronaut::MicronautDetector;
pub use nethttp::NetHttpDetector;
pub use nuxt::NuxtDetector;
pub use openliberty::OpenLibertyDetector;
pub use quarkus::QuarkusDetector;
pub use spring_boot::SpringBootDetector;
pub use spring_cloud::SpringCloudDetector;
pub use vue::VueDetector;
pub use weblogic::WebLogicDetector;
pub use websphere::WebSphereDetector;

/// Ports from the runtime environment, falling back to the component's Dockerfile
pub(crate) fn env_ports(component: &Component, ctx: &DetectionContext, names: &[&str]) -> Vec<u16> {
    let ports = ctx.env.ports(names);
    if !ports.is_empty() {
        return ports;
    }
    dockerfile::env_ports_from_dockerfile(ctx.fs(), &component.path, names)
}

/// Ports captured by group 1 of any `patterns` across the component's source files
pub(crate) fn scan_sources(
    component: &Component,
    ctx: &DetectionContext,
    extensions: &[&str],
    patterns: &[Regex],
) -> Vec<u16> {
    let mut ports = Vec::new();
    for file in ctx.source_files(&component.path, extensions) {
        let Some(content) = ctx.read(&file) else {
            continue;
        };
        for re in patterns {
            for port in ports_from_captures(re, &content, 1) {
                push_unique(&mut ports, port);
            }
        }
    }
    ports
}

/// `host:port` address literal inside a Go call, e.g. `.Run(":8080")`
pub(crate) fn go_address_call(call: &str) -> Regex {
    Regex::new(&format!(r#"{}\(\s*"[^"]*:(\d+)""#, call)).expect("valid regex")
}


#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_env_ports_prefers_runtime() {
        let fs = MockFileSystem::new();
        fs.add_file("Dockerfile", "FROM x\nENV PORT=7000\n");
        let fixture = Fixture::new(fs).with_env("PORT", "7001");
        let component = fixture.component();

        assert_eq!(env_ports(&component, &fixture.ctx(), &["PORT"]), vec![7001]);
    }

    #[test]
    fn test_env_ports_dockerfile_fallback() {
        let fs = MockFileSystem::new();
        fs.add_file("Dockerfile", "FROM x\nENV PORT=7000\n");
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(env_ports(&component, &fixture.ctx(), &["PORT"]), vec![7000]);
    }

    #[test]
    fn test_scan_sources_dedupes() {
        let fs = MockFileSystem::new();
        fs.add_file("a.go", "r.Run(\":8080\")\n");
        fs.add_file("b.go", "r.Run(\":8080\")\nr.Run(\"0.0.0.0:9090\")\n");
        fs.add_file("c.txt", "r.Run(\":1111\")\n");
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        let ports = scan_sources(
            &component,
            &fixture.ctx(),
            &["go"],
            &[go_address_call(r"\.Run")],
        );
        assert_eq!(ports, vec![8080, 9090]);
    }
}
