//! Secrets command - collects credentials and emits them as Kubernetes Secrets.

mod collect;
mod emit;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, OAuthBackend, SecretFormat};
use crate::ports::{ManifestTool, Prompter, TemplateRenderer};

pub use collect::{CollectOptions, SecretPlan, collect};
pub use emit::{RAW_HEADER, WriteReport, raw_lines};

pub const DEFAULT_OUT_DIR: &str = "secrets";

#[derive(Debug, Clone)]
pub struct SecretsOptions {
    pub format: SecretFormat,
    pub oauth: OAuthBackend,
    /// Emit the CloudFlare API token secrets.
    pub cloudflare: bool,
    /// Emit the ArgoCD private repository credentials.
    pub private_repo: bool,
    /// Replace secret files that already exist.
    pub overwrite: bool,
    /// Prompt for the profile and Grafana credentials.
    pub interactive: bool,
    /// Rendered distribution the secrets belong to.
    pub distribution: PathBuf,
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsOutcome {
    /// `raw` format: the lines to print.
    RawValues(Vec<String>),
    Written { written: Vec<PathBuf>, skipped: Vec<PathBuf> },
}

/// Secrets are generated against a rendered distribution.
pub fn check_distribution(options: &SecretsOptions) -> Result<(), AppError> {
    if !options.distribution.is_dir() {
        return Err(AppError::DistributionMissing(options.distribution.display().to_string()));
    }
    Ok(())
}

/// Execute the secrets command.
pub fn execute<M, P, R>(
    ctx: &AppContext<M, P, R>,
    options: &SecretsOptions,
) -> Result<SecretsOutcome, AppError>
where
    M: ManifestTool,
    P: Prompter,
    R: TemplateRenderer,
{
    check_distribution(options)?;

    let plan = collect(
        ctx,
        CollectOptions {
            oauth: options.oauth,
            cloudflare: options.cloudflare,
            private_repo: options.private_repo,
            interactive: options.interactive,
        },
    )?;

    if options.format == SecretFormat::Raw {
        return Ok(SecretsOutcome::RawValues(raw_lines(&plan)));
    }
    if options.format == SecretFormat::Vault {
        emit::check_vault_references(&plan)?;
    }

    let WriteReport { written, skipped } = emit::write_secrets(
        ctx.manifests(),
        &plan,
        options.format,
        &options.out_dir,
        options.overwrite,
    )?;
    Ok(SecretsOutcome::Written { written, skipped })
}
