//! Spring Cloud detector for Java

use super::spring_boot::{spring_application_files, spring_ports};
use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::java_has_group;
use crate::model::{ApplicationFileInfo, Component};
use crate::stack::{FrameworkId, LanguageId};
use std::path::Path;

pub struct SpringCloudDetector;

impl FrameworkDetector for SpringCloudDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::SpringCloud
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "org.springframework.cloud")
    }

    fn application_file_infos(&self, component_path: &Path) -> Vec<ApplicationFileInfo> {
        spring_application_files(component_path)
    }

    fn detect_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        spring_ports(component, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::model::Language;
    use crate::stack::framework::test_support::Fixture;

    const POM: &str = r#"<project>
  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>org.springframework.cloud</groupId>
        <artifactId>spring-cloud-dependencies</artifactId>
      </dependency>
    </dependencies>
  </dependencyManagement>
</project>"#;

    #[test]
    fn test_detect_framework() {
        let mut lang = Language::new("Java", 100.0);
        SpringCloudDetector.detect_framework(&mut lang, POM);
        assert_eq!(lang.frameworks, vec!["Spring Cloud"]);

        let mut gradle = Language::new("Java", 100.0);
        SpringCloudDetector.detect_framework(
            &mut gradle,
            "implementation 'org.springframework.cloud:spring-cloud-starter-gateway'\n",
        );
        assert_eq!(gradle.frameworks, vec!["Spring Cloud"]);

        let mut boot_only = Language::new("Java", 100.0);
        SpringCloudDetector.detect_framework(
            &mut boot_only,
            "<project><parent><groupId>org.springframework.boot</groupId></parent></project>",
        );
        assert!(boot_only.frameworks.is_empty());
    }

    #[test]
    fn test_ports_from_env() {
        let fs = MockFileSystem::new();
        fs.add_file("src/main/resources/application.yml", "server:\n  port: 8761\n");
        let fixture = Fixture::new(fs).with_env("SERVER_HTTP_PORT", "9000");
        let component = fixture.component();

        assert_eq!(
            SpringCloudDetector.detect_ports(&component, &fixture.ctx()),
            vec![9000]
        );
    }

    #[test]
    fn test_ports_from_dockerfile_env() {
        let fs = MockFileSystem::new();
        fs.add_file("Dockerfile", "FROM eclipse-temurin\nENV SERVER_PORT=8888\n");
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(
            SpringCloudDetector.detect_ports(&component, &fixture.ctx()),
            vec![8888]
        );
    }

    #[test]
    fn test_ports_from_application_yaml() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "src/main/resources/application.yaml",
            "spring:\n  application:\n    name: gateway\nserver:\n  port: 8761\n",
        );
        let fixture = Fixture::new(fs);
        let component = fixture.component();

        assert_eq!(
            SpringCloudDetector.detect_ports(&component, &fixture.ctx()),
            vec![8761]
        );
    }
}
