//! Replace command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, ReplaceOptions, ReplaceOutcome};
use crate::domain::AppError;

#[derive(Args)]
pub struct ReplaceArgs {
    /// File to substitute
    input: PathBuf,
    /// KEY=value file; keys are read as ARGOFLOW_<KEY>
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Rewrite the file instead of printing the result
    #[arg(short = 'i', long)]
    inplace: bool,
}

pub fn run_replace(args: ReplaceArgs) -> Result<(), AppError> {
    let options = ReplaceOptions { input: args.input, config: args.config, inplace: args.inplace };
    match api::replace(&options)? {
        ReplaceOutcome::Printed(text) => print!("{text}"),
        ReplaceOutcome::Rewritten(path) => println!("✅ Replaced variables in {}", path.display()),
    }
    Ok(())
}
