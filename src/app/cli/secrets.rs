//! Secrets command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::adapters::kubectl_command::{DEFAULT_KUBECTL, DEFAULT_KUBESEAL};
use crate::app::api::{self, OAuthBackend, SecretFormat, SecretsOptions, SecretsOutcome};
use crate::app::commands::distribution::DEFAULT_DISTRIBUTION;
use crate::app::commands::secrets::DEFAULT_OUT_DIR;
use crate::domain::AppError;

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Print ARGOFLOW_* values only
    Raw,
    /// kubectl Secret manifests
    Generated,
    /// Manifests carrying <path> references for argocd-vault-plugin
    Vault,
    /// kubeseal SealedSecret manifests
    Sealed,
}

impl From<FormatArg> for SecretFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Raw => SecretFormat::Raw,
            FormatArg::Generated => SecretFormat::Generated,
            FormatArg::Vault => SecretFormat::Vault,
            FormatArg::Sealed => SecretFormat::Sealed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OAuthArg {
    Dex,
    Keycloak,
    /// An external OIDC provider
    External,
}

impl From<OAuthArg> for OAuthBackend {
    fn from(arg: OAuthArg) -> Self {
        match arg {
            OAuthArg::Dex => OAuthBackend::Dex,
            OAuthArg::Keycloak => OAuthBackend::Keycloak,
            OAuthArg::External => OAuthBackend::External,
        }
    }
}

#[derive(Args)]
pub struct SecretsArgs {
    /// Output format
    #[arg(value_enum)]
    format: FormatArg,
    /// OAuth provider in front of the dashboard
    #[arg(long, value_enum)]
    oauth_type: OAuthArg,
    /// Include the CloudFlare API token secrets
    #[arg(long)]
    cloudflare: bool,
    /// Include ArgoCD credentials for a private git repository
    #[arg(long)]
    private_repo: bool,
    /// .env file to read variables from (environment variables take precedence)
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Replace secret files that already exist
    #[arg(long)]
    overwrite: bool,
    /// Prompt for profile and Grafana credentials
    #[arg(short = 'i', long)]
    interactive: bool,
    /// Rendered distribution folder
    #[arg(long, default_value = DEFAULT_DISTRIBUTION)]
    distribution: PathBuf,
    /// Folder the secret manifests are written to
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    #[arg(long, env = "ARGOFLOW_KUBECTL", default_value = DEFAULT_KUBECTL)]
    kubectl: String,
    #[arg(long, env = "ARGOFLOW_KUBESEAL", default_value = DEFAULT_KUBESEAL)]
    kubeseal: String,
}

pub fn run_secrets(args: SecretsArgs) -> Result<(), AppError> {
    let options = SecretsOptions {
        format: args.format.into(),
        oauth: args.oauth_type.into(),
        cloudflare: args.cloudflare,
        private_repo: args.private_repo,
        overwrite: args.overwrite,
        interactive: args.interactive,
        distribution: args.distribution,
        out_dir: args.out_dir,
    };

    match api::secrets(args.env_file.as_deref(), &args.kubectl, &args.kubeseal, &options)? {
        SecretsOutcome::RawValues(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        SecretsOutcome::Written { written, skipped } => {
            println!("✅ Wrote {} secret(s) to {}/", written.len(), options.out_dir.display());
            if !skipped.is_empty() {
                println!("ℹ️ Skipped {} existing file(s), use --overwrite to replace them", skipped.len());
            }
        }
    }
    Ok(())
}
