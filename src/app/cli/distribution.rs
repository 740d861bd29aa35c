//! Distribution command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, DistributionOptions};
use crate::app::commands::distribution::{DEFAULT_DISTRIBUTION, DEFAULT_TEMPLATES};
use crate::domain::AppError;

#[derive(Args)]
pub struct DistributionArgs {
    /// .env file to read variables from (environment variables take precedence)
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Delete and re-render an existing distribution folder
    #[arg(short = 'f', long)]
    force: bool,
    /// Print the variables the templates use and exit
    #[arg(short = 'v', long)]
    print_vars: bool,
    /// Template folder to render
    #[arg(long, default_value = DEFAULT_TEMPLATES)]
    templates: PathBuf,
    /// Output folder
    #[arg(long, default_value = DEFAULT_DISTRIBUTION)]
    output: PathBuf,
}

pub fn run_distribution(args: DistributionArgs) -> Result<(), AppError> {
    if args.print_vars {
        println!("{}", api::distribution_help());
        return Ok(());
    }

    let options =
        DistributionOptions { templates: args.templates, output: args.output, force: args.force };
    match api::distribution(args.env_file.as_deref(), &options) {
        Ok(outcome) => {
            println!(
                "✅ Rendered {} file(s) into {}/",
                outcome.files.len(),
                options.output.display()
            );
            Ok(())
        }
        Err(err @ AppError::MissingConfiguration { .. }) => {
            eprintln!("The distribution needs these variables:\n{}", api::distribution_help());
            Err(err)
        }
        Err(err) => Err(err),
    }
}
