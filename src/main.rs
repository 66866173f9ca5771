//! VIL Convert - wired/wireless Vial layout converter
//!
//! Converts a Vial keyboard configuration between the wired 4x12 and the
//! wireless 8x7 key matrix by remapping every layer through a fixed key
//! position table.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vil_convert::cli::{self, CliResult, ExitCode};
use vil_convert::config::Config;
use vil_convert::constants::APP_BINARY_NAME;

/// VIL Convert - move a Vial layout between the wired and wireless keyboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert SOURCE's layout into TARGET's keyboard geometry
    Convert(cli::ConvertArgs),
    /// Show the keyboard type of a configuration file
    Inspect(cli::InspectArgs),
    /// Show which key positions the mapping table covers
    Mapping(cli::MappingArgs),
    /// Show or change the configuration
    Config(cli::ConfigArgs),
}

fn main() {
    // Usage errors share the validation exit code, 2 is reserved for I/O
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() {
            ExitCode::ValidationError
        } else {
            ExitCode::Success
        };
        let _ = err.print();
        std::process::exit(code.code());
    });

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.code.code());
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_file_path().map_err(|e| {
            cli::CliError::io(format!(
                "{e:#}. Pass --config to {APP_BINARY_NAME} to choose a file"
            ))
        })?,
    };

    let load_config = || {
        Config::load_from(&config_path).unwrap_or_else(|e| {
            warn!("Ignoring configuration: {e:#}");
            Config::default()
        })
    };

    match cli.command {
        Command::Convert(args) => args.execute(&load_config()),
        Command::Inspect(args) => args.execute(),
        Command::Mapping(args) => args.execute(&load_config()),
        Command::Config(args) => args.execute(&config_path),
    }
}
