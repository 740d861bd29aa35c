//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::kubectl_command::KubectlCommandAdapter;
use crate::adapters::minijinja_renderer::MiniJinjaRenderer;
use crate::app::AppContext;
use crate::app::commands::{distribution, replace, secrets};
use crate::domain::ConfigLayers;

pub use crate::app::commands::distribution::{DistributionOptions, DistributionOutcome};
pub use crate::app::commands::replace::{ReplaceOptions, ReplaceOutcome};
pub use crate::app::commands::secrets::{SecretsOptions, SecretsOutcome};
pub use crate::domain::{AppError, OAuthBackend, SecretFormat};

/// Snapshot the process environment and layer `env_file` underneath it.
fn load_layers(env_file: Option<&Path>) -> Result<ConfigLayers, AppError> {
    let mut layers = ConfigLayers::from_process();
    if let Some(path) = env_file {
        layers.load_env_file(path)?;
    }
    Ok(layers)
}

// =============================================================================
// Distribution Command API
// =============================================================================

/// Render the template tree into the distribution folder.
pub fn distribution(
    env_file: Option<&Path>,
    options: &DistributionOptions,
) -> Result<DistributionOutcome, AppError> {
    distribution::check_paths(options)?;
    let layers = load_layers(env_file)?;
    let renderer = MiniJinjaRenderer::new(&options.templates)?;
    distribution::execute(&layers, &renderer, options)
}

/// `ENV_VAR=<< group.field >>` lines for every distribution variable.
pub fn distribution_help() -> String {
    distribution::help_message()
}

// =============================================================================
// Secrets Command API
// =============================================================================

/// Collect credentials and emit them in the requested format.
///
/// Templates for derived values (Dex config, Keycloak realm) are read from the
/// rendered distribution.
pub fn secrets(
    env_file: Option<&Path>,
    kubectl: &str,
    kubeseal: &str,
    options: &SecretsOptions,
) -> Result<SecretsOutcome, AppError> {
    secrets::check_distribution(options)?;
    let layers = load_layers(env_file)?;
    let ctx = AppContext::new(
        layers,
        KubectlCommandAdapter::new(kubectl, kubeseal),
        DialoguerPrompter,
        MiniJinjaRenderer::new(&options.distribution)?,
    );
    secrets::execute(&ctx, options)
}

// =============================================================================
// Replace Command API
// =============================================================================

/// Substitute `$ARGOFLOW_*` tokens in a single file.
pub fn replace(options: &ReplaceOptions) -> Result<ReplaceOutcome, AppError> {
    replace::execute(&ConfigLayers::from_process(), options)
}
