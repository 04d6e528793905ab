use stackmatch::cli::commands::{CliArgs, Commands};
use stackmatch::cli::handlers::{handle_component, handle_devfile};

use clap::Parser;

fn main() {
    let args = CliArgs::parse();

    let exit_code = match &args.command {
        Commands::Component(component_args) => handle_component(component_args),
        Commands::Devfile(devfile_args) => handle_devfile(devfile_args),
    };

    std::process::exit(exit_code);
}
