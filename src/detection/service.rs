//! Detection service orchestration
//!
//! `DetectionService` wires the tree scanner, language classifier, component
//! resolver, port pipeline and devfile scorer together behind one entry point.
//! Each call opens a fresh `ScanSession`, so every invocation is a cold scan and
//! nothing is shared between calls.
//!
//! # Example
//!
//! ```no_run
//! use stackmatch::detection::DetectionService;
//!
//! # fn example() -> stackmatch::Result<()> {
//! let service = DetectionService::new();
//! for component in service.detect_components("/path/to/repo")? {
//!     println!("{} {:?}", component.name, component.ports);
//! }
//! # Ok(())
//! # }
//! ```

use super::components::ComponentResolver;
use crate::devfile::{
    filter_types, select_devfile_from_types, select_devfiles_from_components, CatalogClient,
};
use crate::error::Result;
use crate::extractors::{DetectionContext, EnvSource, PortDetector, ProcessEnv};
use crate::fs::{FileSystem, RealFileSystem};
use crate::model::{Component, DetectionSettings, DevfileFilter, DevfileType, Language};
use crate::scan::{ScanSession, TreeScanner};
use crate::stack::{ExtensionClassifier, LanguageClassifier, StackRegistry};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// High-level entry point for component detection and devfile matching.
///
/// The service is immutable once built and can be shared across threads.
pub struct DetectionService {
    fs: Arc<dyn FileSystem>,
    registry: Arc<StackRegistry>,
    env: Arc<dyn EnvSource>,
    classifier: Arc<dyn LanguageClassifier>,
    resolver: ComponentResolver,
    ports: PortDetector,
}

impl std::fmt::Debug for DetectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionService")
            .field("languages", &self.registry.languages().count())
            .finish()
    }
}

impl Default for DetectionService {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionService {
    /// Real file system, process environment and the default registry
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(RealFileSystem::new()),
            Arc::new(StackRegistry::with_defaults()),
            Arc::new(ProcessEnv),
        )
    }

    /// Builds a service over custom collaborators, e.g. `MockFileSystem` and a map environment
    pub fn with_parts(
        fs: Arc<dyn FileSystem>,
        registry: Arc<StackRegistry>,
        env: Arc<dyn EnvSource>,
    ) -> Self {
        let classifier: Arc<dyn LanguageClassifier> = Arc::new(ExtensionClassifier::new(
            Arc::clone(&registry),
            Arc::clone(&fs),
        ));
        let resolver = ComponentResolver::new(Arc::clone(&registry), Arc::clone(&classifier));
        let ports = PortDetector::new(Arc::clone(&registry));

        Self {
            fs,
            registry,
            env,
            classifier,
            resolver,
            ports,
        }
    }

    pub fn registry(&self) -> &StackRegistry {
        &self.registry
    }

    fn session(&self) -> ScanSession {
        let excluded: Vec<String> = self
            .registry
            .all_excluded_dirs()
            .iter()
            .map(|d| d.to_string())
            .collect();
        ScanSession::new(TreeScanner::new(Arc::clone(&self.fs), excluded))
    }

    /// Language profile of the whole tree under `path`, heaviest first
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<Vec<Language>> {
        let session = self.session();
        self.analyze_in(&session, path.as_ref())
    }

    fn analyze_in(&self, session: &ScanSession, path: &Path) -> Result<Vec<Language>> {
        let root = session.scanner().resolve_root(path)?;
        let files = session.files_under(&root)?;
        let languages = self.classifier.analyze(&root, &files)?;
        debug!(root = %root.display(), languages = languages.len(), "Analyzed tree");
        Ok(languages)
    }

    /// Components under `path`, with ports from every strategy
    pub fn detect_components(&self, path: impl AsRef<Path>) -> Result<Vec<Component>> {
        self.detect_components_with_settings(&DetectionSettings::new(path.as_ref()))
    }

    pub fn detect_components_with_settings(
        &self,
        settings: &DetectionSettings,
    ) -> Result<Vec<Component>> {
        let session = self.session();
        self.components_in(&session, settings)
    }

    fn components_in(
        &self,
        session: &ScanSession,
        settings: &DetectionSettings,
    ) -> Result<Vec<Component>> {
        let start = Instant::now();
        info!(path = %settings.base_path.display(), "Starting component detection");

        let mut components = self.resolver.resolve(session, &settings.base_path)?;

        if settings.port_detection_strategy.is_empty() {
            debug!("Port detection disabled");
        } else {
            let ctx = DetectionContext::new(session, self.env.as_ref());
            let strategies = &settings.port_detection_strategy;
            components.par_iter_mut().for_each(|component| {
                component.ports = self.ports.detect_ports(component, strategies, &ctx);
            });
        }

        info!(
            components = components.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Component detection completed"
        );
        Ok(components)
    }

    /// Ranked catalog entries for the tree under `path`.
    ///
    /// Every component contributes its matches. When no component matches, the
    /// single best entry for the whole tree's language profile is returned.
    pub fn select_devfiles(
        &self,
        path: impl AsRef<Path>,
        types: &[DevfileType],
    ) -> Result<Vec<DevfileType>> {
        let path = path.as_ref();
        let session = self.session();

        let settings = DetectionSettings::new(path).without_port_detection();
        let components = self.components_in(&session, &settings)?;
        let indices = select_devfiles_from_components(&components, types)?;
        if !indices.is_empty() {
            return Ok(indices.into_iter().map(|i| types[i].clone()).collect());
        }

        debug!("No component matched, falling back to the tree's language profile");
        let languages = self.analyze_in(&session, path)?;
        let index = select_devfile_from_types(&languages, types)?;
        Ok(vec![types[index].clone()])
    }

    /// Downloads the catalog from `registry_url`, keeps the entries inside
    /// `filter`'s schema range and ranks them against the tree under `path`.
    pub fn match_devfiles(
        &self,
        path: impl AsRef<Path>,
        registry_url: &str,
        filter: &DevfileFilter,
        client: &dyn CatalogClient,
    ) -> Result<Vec<DevfileType>> {
        let path = path.as_ref();
        info!(path = %path.display(), registry = registry_url, "Starting devfile matching");

        filter.validate()?;
        // fail on a bad root before going to the network
        self.session().scanner().resolve_root(path)?;

        let downloaded = client.download_devfile_types(registry_url, filter)?;
        let types = filter_types(downloaded, filter)?;
        debug!(entries = types.len(), "Catalog entries within schema range");

        let matches = self.select_devfiles(path, &types)?;
        info!(matches = matches.len(), "Devfile matching completed");
        Ok(matches)
    }
}
