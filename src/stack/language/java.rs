//! Java language definition (Maven and Gradle)

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct JavaLanguage;

impl LanguageDefinition for JavaLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Java
    }

    fn extensions(&self) -> &[&'static str] {
        &["java"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["pom.xml", "build.gradle", "build.gradle.kts"]
    }

    fn tools_for(&self, manifest_name: &str) -> &[&'static str] {
        match manifest_name {
            "pom.xml" => &["Maven"],
            "build.gradle" | "build.gradle.kts" => &["Gradle"],
            _ => &[],
        }
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["target", "build", ".gradle", ".m2"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_tools() {
        assert_eq!(JavaLanguage.tools_for("pom.xml"), &["Maven"]);
        assert_eq!(JavaLanguage.tools_for("build.gradle.kts"), &["Gradle"]);
        assert!(JavaLanguage.tools_for("settings.xml").is_empty());
    }
}
