//! Command handlers
//!
//! Each handler sets up logging, runs one command and returns the process exit
//! code. Results go to stdout; errors are reported on stderr.

use super::commands::{ComponentArgs, DevfileArgs};
use super::output::OutputFormatter;
use crate::config::StackmatchConfig;
use crate::detection::DetectionService;
use crate::devfile::RegistryClient;
use crate::error::DetectError;
use crate::model::{DetectionSettings, DevfileFilter};
use crate::util::{init_logging, parse_cli_level, parse_level, LoggingConfig};
use anyhow::{Context, Result};
use tracing::{debug, error};

pub fn handle_component(args: &ComponentArgs) -> i32 {
    report(run_component(args))
}

pub fn handle_devfile(args: &DevfileArgs) -> i32 {
    report(run_devfile(args))
}

fn run_component(args: &ComponentArgs) -> Result<String> {
    load_config(args.log.as_deref())?;
    debug!(?args, "Running component command");

    let settings = DetectionSettings {
        base_path: args.path.clone(),
        port_detection_strategy: args.strategies(),
    };
    let components = DetectionService::new().detect_components_with_settings(&settings)?;

    OutputFormatter::new(args.format.into()).format(&components)
}

fn run_devfile(args: &DevfileArgs) -> Result<String> {
    let config = load_config(args.log.as_deref())?;
    debug!(?args, "Running devfile command");

    let registry = args.registry.as_deref().unwrap_or(&config.registry);
    let filter = DevfileFilter::new(
        args.min_schema_version.as_deref(),
        args.max_schema_version.as_deref(),
    );
    let client = RegistryClient::new(config.http_timeout())
        .context("Failed to build the registry HTTP client")?;

    let types = DetectionService::new().match_devfiles(&args.path, registry, &filter, &client)?;

    OutputFormatter::new(args.format.into()).format(&types)
}

/// Loads the environment configuration and installs the subscriber.
///
/// A `--log` value overrides `STACKMATCH_LOG_LEVEL`.
fn load_config(log: Option<&str>) -> Result<StackmatchConfig> {
    let config = StackmatchConfig::from_env().context("Invalid STACKMATCH_* configuration")?;

    let level = match log {
        Some(value) => parse_cli_level(value)?,
        None => parse_level(&config.log_level),
    };
    init_logging(LoggingConfig::with_level(level).json(config.log_json));

    Ok(config)
}

fn report(result: Result<String>) -> i32 {
    match result {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            match e.downcast_ref::<DetectError>() {
                Some(detect) => eprintln!("{}", detect.help_message()),
                None => eprintln!("Error: {:#}", e),
            }
            1
        }
    }
}
