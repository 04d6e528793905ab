use crate::model::PortDetectionAlgorithm;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Component, port and devfile detection for source trees
#[derive(Parser, Debug)]
#[command(
    name = "stackmatch",
    about = "Detect components, ports and matching devfiles in a source tree",
    version,
    long_about = "stackmatch inspects a source tree without running it: it finds the \
                  independently deployable components, the ports each one exposes, and the \
                  devfile registry entries that best fit them."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect components and their ports",
        long_about = "Groups the source tree into components and resolves the ports each \
                      component exposes.\n\n\
                      Examples:\n  \
                      stackmatch component .\n  \
                      stackmatch component /path/to/repo --no-port-detection\n  \
                      stackmatch component /path/to/repo --format yaml --log debug"
    )]
    Component(ComponentArgs),

    #[command(
        about = "Select devfiles from a registry",
        long_about = "Downloads the devfile registry index and selects the entries matching \
                      the components found in the source tree.\n\n\
                      Examples:\n  \
                      stackmatch devfile .\n  \
                      stackmatch devfile /path/to/repo --min-schema-version 2.1.0\n  \
                      stackmatch devfile /path/to/repo -r http://localhost:8080"
    )]
    Devfile(DevfileArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ComponentArgs {
    #[arg(value_name = "PATH", help = "Root of the source tree")]
    pub path: PathBuf,

    #[arg(
        long,
        value_name = "LEVEL",
        help = "Log level (default: error). Accepted values: debug, info, warning"
    )]
    pub log: Option<String>,

    #[arg(long, help = "Skip port detection")]
    pub no_port_detection: bool,

    #[arg(
        long,
        value_name = "STRATEGY",
        value_delimiter = ',',
        value_parser = parse_strategy,
        conflicts_with = "no_port_detection",
        help = "(deprecated) Port detection strategies, in order: docker, compose, source"
    )]
    pub port_detection: Vec<PortDetectionAlgorithm>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

impl ComponentArgs {
    /// Strategies to run: none with `--no-port-detection`, the explicit list, or all
    pub fn strategies(&self) -> Vec<PortDetectionAlgorithm> {
        if self.no_port_detection {
            Vec::new()
        } else if !self.port_detection.is_empty() {
            self.port_detection.clone()
        } else {
            PortDetectionAlgorithm::all()
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct DevfileArgs {
    #[arg(value_name = "PATH", help = "Root of the source tree")]
    pub path: PathBuf,

    #[arg(
        short = 'r',
        long,
        value_name = "URL",
        help = "Devfile registry (default: STACKMATCH_REGISTRY or https://registry.devfile.io/)"
    )]
    pub registry: Option<String>,

    #[arg(
        long,
        value_name = "VERSION",
        help = "Minimum devfile schemaVersion. Minimum allowed version: 2.0.0"
    )]
    pub min_schema_version: Option<String>,

    #[arg(
        long,
        value_name = "VERSION",
        help = "Maximum devfile schemaVersion. Minimum allowed version: 2.0.0"
    )]
    pub max_schema_version: Option<String>,

    #[arg(
        long,
        value_name = "LEVEL",
        help = "Log level (default: error). Accepted values: debug, info, warning"
    )]
    pub log: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}

fn parse_strategy(s: &str) -> Result<PortDetectionAlgorithm, String> {
    s.trim().parse()
}
