use super::{FrameworkId, LanguageId};
use crate::stack::framework::*;
use crate::stack::language::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Language definitions and framework detectors known to the detection pipeline.
///
/// Registration order matters: it decides which language owns an extension or a
/// manifest shared by several languages, and the order detectors are consulted in.
pub struct StackRegistry {
    languages: Vec<Arc<dyn LanguageDefinition>>,
    frameworks: Vec<Arc<dyn FrameworkDetector>>,
    defaults: HashMap<LanguageId, Vec<Arc<dyn FrameworkDetector>>>,
}

impl StackRegistry {
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            frameworks: Vec::new(),
            defaults: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_language(Arc::new(GoLanguage));
        registry.register_language(Arc::new(JavaLanguage));
        registry.register_language(Arc::new(JavaScriptLanguage));
        registry.register_language(Arc::new(TypeScriptLanguage));
        registry.register_language(Arc::new(PythonLanguage));
        registry.register_language(Arc::new(RustLanguage));
        registry.register_language(Arc::new(DotNetLanguage));
        registry.register_language(Arc::new(PhpLanguage));
        registry.register_language(Arc::new(RubyLanguage));

        for id in FrameworkId::all_variants() {
            let detector: Arc<dyn FrameworkDetector> = match id {
                FrameworkId::SpringBoot => Arc::new(SpringBootDetector),
                FrameworkId::SpringCloud => Arc::new(SpringCloudDetector),
                FrameworkId::Quarkus => Arc::new(QuarkusDetector),
                FrameworkId::Micronaut => Arc::new(MicronautDetector),
                FrameworkId::OpenLiberty => Arc::new(OpenLibertyDetector),
                FrameworkId::JakartaEe => Arc::new(JakartaEeDetector),
                FrameworkId::WebSphere => Arc::new(WebSphereDetector),
                FrameworkId::WebLogic => Arc::new(WebLogicDetector),
                FrameworkId::Express => Arc::new(ExpressDetector),
                FrameworkId::Vue => Arc::new(VueDetector),
                FrameworkId::Nuxt => Arc::new(NuxtDetector),
                FrameworkId::Gin => Arc::new(GinDetector),
                FrameworkId::Echo => Arc::new(EchoDetector),
                FrameworkId::FastHttp => Arc::new(FastHttpDetector),
                FrameworkId::NetHttp => {
                    registry.register_default(LanguageId::Go, Arc::new(NetHttpDetector));
                    continue;
                }
                FrameworkId::Flask => Arc::new(FlaskDetector),
                FrameworkId::Django => Arc::new(DjangoDetector),
            };
            registry.register_framework(detector);
        }

        registry
    }

    pub fn register_language(&mut self, language: Arc<dyn LanguageDefinition>) {
        self.languages.push(language);
    }

    pub fn register_framework(&mut self, detector: Arc<dyn FrameworkDetector>) {
        self.frameworks.push(detector);
    }

    /// Detector consulted for a language's components when no framework was tagged
    pub fn register_default(&mut self, language: LanguageId, detector: Arc<dyn FrameworkDetector>) {
        self.defaults.entry(language).or_default().push(detector);
    }

    pub fn languages(&self) -> impl Iterator<Item = &dyn LanguageDefinition> {
        self.languages.iter().map(|l| l.as_ref())
    }

    pub fn get_language(&self, id: LanguageId) -> Option<&dyn LanguageDefinition> {
        self.languages().find(|l| l.id() == id)
    }

    /// First registered language claiming the (case-insensitive) extension
    pub fn language_for_extension(&self, extension: &str) -> Option<&dyn LanguageDefinition> {
        let extension = extension.to_ascii_lowercase();
        self.languages()
            .find(|l| l.extensions().contains(&extension.as_str()))
    }

    /// Languages whose manifests include `file_name`, in registration order
    pub fn languages_for_manifest(&self, file_name: &str) -> Vec<&dyn LanguageDefinition> {
        self.languages()
            .filter(|l| l.matching_manifest(file_name).is_some())
            .collect()
    }

    pub fn is_manifest(&self, file_name: &str) -> bool {
        self.languages()
            .any(|l| l.matching_manifest(file_name).is_some())
    }

    /// Whether some language treats `file_name` as an application entry point
    pub fn is_entrypoint(&self, file_name: &str) -> bool {
        self.languages().any(|l| l.is_entrypoint(file_name))
    }

    pub fn all_excluded_dirs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for lang in &self.languages {
            for dir in lang.excluded_dirs() {
                if seen.insert(*dir) {
                    result.push(*dir);
                }
            }
        }
        result
    }

    /// Detectors that may tag a language's manifests
    pub fn frameworks_for_language(&self, id: LanguageId) -> Vec<&dyn FrameworkDetector> {
        self.frameworks
            .iter()
            .filter(|d| d.languages().contains(&id))
            .map(|d| d.as_ref())
            .collect()
    }

    /// Detectors that tag a language with `name`, matched case-insensitively
    pub fn detectors_for_framework(&self, name: &str) -> Vec<&dyn FrameworkDetector> {
        self.frameworks
            .iter()
            .filter(|d| {
                d.framework_names()
                    .iter()
                    .any(|n| n.eq_ignore_ascii_case(name))
            })
            .map(|d| d.as_ref())
            .collect()
    }

    pub fn default_detectors(&self, id: LanguageId) -> Vec<&dyn FrameworkDetector> {
        self.defaults
            .get(&id)
            .map(|ds| ds.iter().map(|d| d.as_ref()).collect())
            .unwrap_or_default()
    }
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
