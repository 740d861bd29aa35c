//! Replace command - fills `$ARGOFLOW_*` tokens in a single file.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::dotenv::parse_conf;
use crate::domain::substitution::{VAR_PREFIX, replacement_vars, substitute};
use crate::domain::{AppError, ConfigLayers};

#[derive(Debug, Clone)]
pub struct ReplaceOptions {
    pub input: PathBuf,
    /// `KEY=value` file whose keys get the `ARGOFLOW_` prefix.
    pub config: Option<PathBuf>,
    /// Rewrite `input` instead of printing the result.
    pub inplace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Printed(String),
    Rewritten(PathBuf),
}

pub fn execute(layers: &ConfigLayers, options: &ReplaceOptions) -> Result<ReplaceOutcome, AppError> {
    let text = fs::read_to_string(&options.input)?;

    let conf = match &options.config {
        Some(path) => parse_conf(&fs::read_to_string(path)?),
        None => Vec::new(),
    };
    let vars = replacement_vars(conf, layers.environment_with_prefix(VAR_PREFIX));
    debug!("{} replacement variables", vars.len());

    let replaced = substitute(&text, &vars);

    if options.inplace {
        fs::write(&options.input, replaced)?;
        info!("Replaced variables in {}", options.input.display());
        return Ok(ReplaceOutcome::Rewritten(options.input.clone()));
    }
    Ok(ReplaceOutcome::Printed(replaced))
}
