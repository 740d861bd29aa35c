//! CLI Adapter.

mod distribution;
mod replace;
mod secrets;

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "argoflow")]
#[command(version)]
#[command(
    about = "Render the Argoflow distribution and generate its Kubernetes secrets",
    long_about = None
)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Log debug output, including where each value was resolved from
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the template folder into a distribution folder
    #[clap(visible_alias = "d")]
    Distribution(distribution::DistributionArgs),
    /// Generate Kubernetes secrets for the distribution
    #[clap(visible_alias = "s")]
    Secrets(secrets::SecretsArgs),
    /// Replace $ARGOFLOW_* tokens in a file
    #[clap(visible_alias = "r")]
    Replace(replace::ReplaceArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Distribution(args) => distribution::run_distribution(args),
        Commands::Secrets(args) => secrets::run_secrets(args),
        Commands::Replace(args) => replace::run_replace(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries rendered output only.
fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = if quiet || verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
