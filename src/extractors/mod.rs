// Evidence extraction for port detection
//
// Extractors read container build files, Compose manifests, framework
// configuration and source code to resolve the ports a component listens on.
// Everything here reads through the `FileSystem` trait and the read-only
// `EnvSource`, so the pipeline can run against a mock tree.

pub mod context;
pub mod env_vars;
pub mod parsers;
pub mod port;

pub use context::DetectionContext;
pub use env_vars::{EnvSource, ProcessEnv};
pub use port::PortDetector;
