//! Go language definition

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct GoLanguage;

impl LanguageDefinition for GoLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Go
    }

    fn aliases(&self) -> &[&'static str] {
        &["golang"]
    }

    fn extensions(&self) -> &[&'static str] {
        &["go"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["go.mod"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &["Go Modules"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["vendor"]
    }
}
