//! Port detection pipeline: container build files, Compose manifests, then framework sources

use crate::extractors::context::DetectionContext;
use crate::extractors::parsers::{docker_compose, dockerfile};
use crate::model::{Component, PortDetectionAlgorithm};
use crate::stack::{FrameworkDetector, FrameworkId, LanguageId, StackRegistry};
use std::sync::Arc;
use tracing::{debug, info};

pub struct PortDetector {
    registry: Arc<StackRegistry>,
}

impl PortDetector {
    pub fn new(registry: Arc<StackRegistry>) -> Self {
        Self { registry }
    }

    /// Ports of the first strategy, in `strategies` order, that finds any
    pub fn detect_ports(
        &self,
        component: &Component,
        strategies: &[PortDetectionAlgorithm],
        ctx: &DetectionContext,
    ) -> Vec<u16> {
        for strategy in strategies {
            let ports = match strategy {
                PortDetectionAlgorithm::DockerFile => {
                    dockerfile::exposed_ports(ctx.fs(), &component.path)
                }
                PortDetectionAlgorithm::Compose => {
                    docker_compose::find_ports(ctx.fs(), &component.path)
                }
                PortDetectionAlgorithm::Source => self.source_ports(component, ctx),
            };

            if !ports.is_empty() {
                info!(
                    component = %component.name,
                    strategy = %strategy,
                    ?ports,
                    "Ports detected"
                );
                return ports;
            }
            debug!(component = %component.name, strategy = %strategy, "No ports from strategy");
        }
        Vec::new()
    }

    /// Detectors for the component's frameworks, or its languages' defaults when it has none
    fn source_detectors(&self, component: &Component) -> Vec<&dyn FrameworkDetector> {
        let frameworks = component.frameworks();
        let candidates: Vec<&dyn FrameworkDetector> = if frameworks.is_empty() {
            component
                .languages
                .iter()
                .filter_map(|l| LanguageId::from_name(&l.name))
                .flat_map(|id| self.registry.default_detectors(id))
                .collect()
        } else {
            frameworks
                .iter()
                .flat_map(|name| self.registry.detectors_for_framework(name))
                .collect()
        };

        let mut seen: Vec<FrameworkId> = Vec::new();
        candidates
            .into_iter()
            .filter(|d| {
                if seen.contains(&d.id()) {
                    return false;
                }
                seen.push(d.id());
                true
            })
            .collect()
    }

    fn source_ports(&self, component: &Component, ctx: &DetectionContext) -> Vec<u16> {
        for detector in self.source_detectors(component) {
            let ports = detector.detect_ports(component, ctx);
            if !ports.is_empty() {
                debug!(component = %component.name, framework = %detector.id(), "Detector found ports");
                return ports;
            }
        }
        Vec::new()
    }
}
