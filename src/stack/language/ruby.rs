//! Ruby language definition

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct RubyLanguage;

impl LanguageDefinition for RubyLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Ruby
    }

    fn extensions(&self) -> &[&'static str] {
        &["rb"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["Gemfile"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &["Bundler"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["vendor", ".bundle"]
    }
}
