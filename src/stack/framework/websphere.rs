//! WebSphere detector for Java

use super::FrameworkDetector;
use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::manifest::java_has_group;
use crate::model::Component;
use crate::stack::{FrameworkId, LanguageId};

pub struct WebSphereDetector;

impl FrameworkDetector for WebSphereDetector {
    fn id(&self) -> FrameworkId {
        FrameworkId::WebSphere
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Java]
    }

    /// Liberty builds also pull `com.ibm.websphere.appserver` artifacts; those are OpenLiberty
    fn uses_framework(&self, config: &str) -> bool {
        java_has_group(config, "com.ibm.websphere.appserver")
            && !java_has_group(config, "io.openliberty")
    }

    fn detect_ports(&self, _component: &Component, _ctx: &DetectionContext) -> Vec<u16> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    const WEBSPHERE_POM: &str = r#"<project>
  <dependencies>
    <dependency>
      <groupId>com.ibm.websphere.appserver.api</groupId>
      <artifactId>com.ibm.websphere.appserver.api.servlet</artifactId>
    </dependency>
  </dependencies>
</project>"#;

    const LIBERTY_POM: &str = r#"<project>
  <dependencies>
    <dependency>
      <groupId>com.ibm.websphere.appserver.api</groupId>
      <artifactId>com.ibm.websphere.appserver.api.servlet</artifactId>
    </dependency>
  </dependencies>
  <build>
    <plugins>
      <plugin>
        <groupId>io.openliberty.tools</groupId>
        <artifactId>liberty-maven-plugin</artifactId>
      </plugin>
    </plugins>
  </build>
</project>"#;

    #[test]
    fn test_detect_framework() {
        let mut lang = Language::new("Java", 100.0);
        WebSphereDetector.detect_framework(&mut lang, WEBSPHERE_POM);
        assert_eq!(lang.frameworks, vec!["WebSphere"]);
    }

    #[test]
    fn test_open_liberty_build_is_not_websphere() {
        let mut lang = Language::new("Java", 100.0);
        WebSphereDetector.detect_framework(&mut lang, LIBERTY_POM);
        assert!(lang.frameworks.is_empty());
    }
}
