//! PHP language definition

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct PhpLanguage;

impl LanguageDefinition for PhpLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Php
    }

    fn extensions(&self) -> &[&'static str] {
        &["php"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["composer.json"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &["Composer"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["vendor"]
    }
}
