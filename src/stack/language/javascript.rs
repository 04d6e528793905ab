//! JavaScript and TypeScript language definitions (npm ecosystem)

use super::LanguageDefinition;
use crate::stack::LanguageId;

const NODE_EXCLUDED: &[&str] = &["node_modules", "dist", ".next", ".nuxt", "bower_components"];

pub struct JavaScriptLanguage;

impl LanguageDefinition for JavaScriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::JavaScript
    }

    fn aliases(&self) -> &[&'static str] {
        &["js", "node", "nodejs"]
    }

    fn extensions(&self) -> &[&'static str] {
        &["js", "mjs", "cjs", "jsx", "vue"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["package.json"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &["NodeJS", "Node.js"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        NODE_EXCLUDED
    }
}

pub struct TypeScriptLanguage;

impl LanguageDefinition for TypeScriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::TypeScript
    }

    fn aliases(&self) -> &[&'static str] {
        &["ts"]
    }

    fn extensions(&self) -> &[&'static str] {
        &["ts", "tsx", "mts", "cts"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["package.json", "tsconfig.json"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &["NodeJS", "Node.js"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        NODE_EXCLUDED
    }
}
