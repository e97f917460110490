//! # pixkey CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixkey_cli::inspect::{run_inspect, InspectArgs};
use pixkey_cli::normalize::{run_format, run_normalize, KeyArgs};
use pixkey_cli::validate::{run_validate, ValidateArgs};
use pixkey_core::Region;

/// PIX key toolkit.
///
/// Classifies a key as CPF, CNPJ, random (UUID), email or phone, and
/// prints its canonical or display form.
#[derive(Parser, Debug)]
#[command(name = "pixkey", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default dialing region for phone numbers without a country code.
    #[arg(long, global = true)]
    region: Option<Region>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every kind the key satisfies.
    Validate(ValidateArgs),

    /// Print the canonical (machine) form of the key.
    Normalize(KeyArgs),

    /// Print the display (human) form of the key.
    Format(KeyArgs),

    /// Print a JSON report with matches, resolved kind and both forms.
    Inspect(InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("pixkey CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let engine = match pixkey_cli::build_engine(cli.config.as_deref(), cli.region) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &engine),
        Commands::Normalize(args) => run_normalize(args, &engine),
        Commands::Format(args) => run_format(args, &engine),
        Commands::Inspect(args) => run_inspect(args, &engine),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
