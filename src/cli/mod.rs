pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, ComponentArgs, DevfileArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
