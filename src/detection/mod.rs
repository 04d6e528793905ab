//! Component detection
//!
//! `components` groups a scanned tree into component roots; `service` runs the
//! whole pipeline from a root path to components with ports and matched devfiles.

pub mod components;
pub mod service;

pub use components::ComponentResolver;
pub use service::DetectionService;
