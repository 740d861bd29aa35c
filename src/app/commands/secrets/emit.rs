//! Turning a collected plan into output.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::collect::SecretPlan;
use crate::adapters::distribution_filesystem::{WriteOutcome, write_guarded};
use crate::domain::secret::{
    format_raw_line, is_vault_reference, restore_plain_values, sealed_json_to_yaml,
};
use crate::domain::{AppError, PlannedSecret, SecretFormat};
use crate::ports::ManifestTool;

pub const RAW_HEADER: &str = "### Argoflow Values";

/// Header line followed by one `ENV_VAR="value"` line per collected field.
pub fn raw_lines(plan: &SecretPlan) -> Vec<String> {
    let mut lines = vec![RAW_HEADER.to_string()];
    for settings in &plan.values {
        for field in settings.fields() {
            lines.push(format_raw_line(&field.env_var, &field.value));
        }
    }
    lines
}

/// Every collected value must be a `<path>` reference before vault manifests are built.
pub fn check_vault_references(plan: &SecretPlan) -> Result<(), AppError> {
    for settings in &plan.values {
        for field in settings.fields() {
            if !is_vault_reference(&field.value) {
                return Err(AppError::NotAVaultReference { variable: field.env_var.clone() });
            }
        }
    }
    Ok(())
}

/// Manifest text for one secret in the given format.
pub fn render_manifest<M: ManifestTool>(
    tool: &M,
    secret: &PlannedSecret,
    format: SecretFormat,
) -> Result<String, AppError> {
    let manifest = tool.create_secret(&secret.spec)?;
    match format {
        SecretFormat::Vault => Ok(restore_plain_values(&manifest, &secret.spec)),
        SecretFormat::Sealed => sealed_json_to_yaml(&tool.seal(&manifest)?),
        SecretFormat::Generated | SecretFormat::Raw => Ok(manifest),
    }
}

/// Files written and skipped by [`write_secrets`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Write every planned secret to `<out_dir>/<format>/<path>`.
pub fn write_secrets<M: ManifestTool>(
    tool: &M,
    plan: &SecretPlan,
    format: SecretFormat,
    out_dir: &Path,
    overwrite: bool,
) -> Result<WriteReport, AppError> {
    let base = out_dir.join(format.as_str());
    let mut report = WriteReport::default();

    for secret in &plan.secrets {
        let dest = base.join(&secret.path);
        debug!("Creating {format} secret {} in {}", secret.spec.name, secret.spec.namespace);
        let manifest = render_manifest(tool, secret, format)?;
        match write_guarded(&dest, &manifest, overwrite)? {
            WriteOutcome::Skipped => report.skipped.push(dest),
            WriteOutcome::Created | WriteOutcome::Overwritten => report.written.push(dest),
        }
    }

    info!("{} secrets written, {} skipped", report.written.len(), report.skipped.len());
    Ok(report)
}
