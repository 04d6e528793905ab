//! Read-only access to runtime environment variables

use super::parsers::parse_port;
use std::collections::HashMap;

/// Source of environment variables for port detection.
///
/// Detectors only ever read through this trait; tests substitute a map so no
/// test needs to touch the process environment.
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;

    /// Valid ports held by any of `names`, in `names` order
    fn ports(&self, names: &[&str]) -> Vec<u16> {
        let mut ports = Vec::new();
        for name in names {
            if let Some(port) = self.var(name).and_then(|v| parse_port(&v)) {
                if !ports.contains(&port) {
                    ports.push(port);
                }
            }
        }
        ports
    }
}

/// The process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
