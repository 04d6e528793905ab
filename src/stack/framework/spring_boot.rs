//! Spring Boot detector for Java

use super::{env_ports, FrameworkDetector};
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::config::{
    is_yaml, parse_properties, property_port, yaml_documents, yaml_port,
};
use crate::extractors::parsers::manifest::java_has_group;
use crate::extractors::parsers::push_unique;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use std::path::Path;

const ENV_PORTS: &[&str] = &["SERVER_PORT", "SERVER_HTTP_PORT"];
const CONFIG_KEYS: &[&str] = &["server.port", "server.http.port"];

pub struct SpringBootDetector;

impl FrameworkDetector for SpringBootDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::SpringBoot
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn framework_names(&self) -> Vec<&'static str> {
        vec!["Spring Boot", "Spring"]
    }

    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "org.springframework.boot")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        spring_application_files(component_path)
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        spring_ports(component, ctx)
    }
}

/// `application.{properties,yml,yaml}` under `src/main/resources`
pub(crate) fn spring_application_files(component_path: &Path) -> Vec<ApplicationFileInfo> {
    ["application.properties", "application.yml", "application.yaml"]
        .iter()
        .map(|file| ApplicationFileInfo::new(component_path, "src/main/resources", file))
        .collect()
}

/// Ports of a Spring application: `SERVER_PORT`/`SERVER_HTTP_PORT` from the runtime
/// or Dockerfile environment, then `server.port`/`server.http.port` in the first
/// application file present.
pub(crate) fn spring_ports(component: &Component, ctx: &DetectionContext) -> Vec<u16> {
    let ports = env_ports(component, ctx, ENV_PORTS);
    if !ports.is_empty() {
        return ports;
    }

    let Some(file) = ctx.application_file(&spring_application_files(&component.path)) else {
        return Vec::new();
    };
    let Some(content) = ctx.read(&file) else {
        return Vec::new();
    };

    let mut ports = Vec::new();
    if is_yaml(&file) {
        for doc in yaml_documents(&content) {
            for key in CONFIG_KEYS {
                if let Some(port) = yaml_port(&doc, key) {
                    push_unique(&mut ports, port);
                }
            }
        }
    } else {
        let props = parse_properties(&content);
        for key in CONFIG_KEYS {
            if let Some(port) = property_port(&props, key) {
                push_unique(&mut ports, port);
            }
        }
    }
    ports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::model::Language;
    use crate::stack::framework::test_support::Fixture;

    const POM: &str = r#"<project>
  <parent>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-boot-starter-parent</artifactId>
  </parent>
</project>"#;

    #[test]
    fn test_detect_framework() {
        let mut lang = Language::new("Java", 100.0);
        SpringBootDetector.detect_framework(&mut lang, POM);
        assert_eq!(lang.frameworks, vec!["Spring Boot", "Spring"]);

        let mut other = Language::new("Java", 100.0);
        SpringBootDetector.detect_framework(&mut other, "<project/>");
        assert!(other.frameworks.is_empty());
    }

    #[test]
    fn test_ports_from_env_before_config() {
        let fs = MockFileSystem::new();
        fs.add_file("src/main/resources/application.properties", "server.port=9090\n");
        let fixture = Fixture::new(fs).with_env("SERVER_PORT", "8181");
        let component = fixture.component();

        assert_eq!(
            SpringBootDetector.detect_ports(&component, &fixture.ctx()),
            vec![8181]
        );
    }

    #[test]
    fn test_ports_from_properties() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "src/main/resources/application.properties",
            "server.port=9090\nserver.http.port=9091\n",
        );
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(
            SpringBootDetector.detect_ports(&component, &fixture.ctx()),
            vec![9090, 9091]
        );
    }

    #[test]
    fn test_ports_from_yaml_profiles() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "src/main/resources/application.yml",
            "server:\n  port: 8082\n---\nspring:\n  config:\n    activate:\n      on-profile: prod\nserver:\n  port: 8083\n",
        );
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(
            SpringBootDetector.detect_ports(&component, &fixture.ctx()),
            vec![8082, 8083]
        );
    }

    #[test]
    fn test_ports_from_dockerfile_env() {
        let fs = MockFileSystem::new();
        fs.add_file("Dockerfile", "FROM eclipse-temurin\nENV SERVER_PORT 8484\n");
        fs.add_file("src/main/resources/application.properties", "server.port=9090\n");
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(
            SpringBootDetector.detect_ports(&component, &fixture.ctx()),
            vec![8484]
        );
    }

    #[test]
    fn test_no_evidence() {
        let fixture = Fixture::new(MockFileSystem::new());
        let component = fixture.component();
        assert!(SpringBootDetector
            .detect_ports(&component, &fixture.ctx())
            .is_empty());
    }
}
