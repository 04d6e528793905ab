//! Source tree walking and the run-scoped scan cache

mod scanner;
mod session;

pub use scanner::{ScanEntry, TreeScanner};
pub use session::ScanSession;
