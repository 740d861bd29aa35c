use crate::domain::{AppError, SecretSpec};

/// Port for the external tools that turn secrets into manifests.
pub trait ManifestTool {
    /// Render a Secret manifest (YAML) for `spec`.
    fn create_secret(&self, spec: &SecretSpec) -> Result<String, AppError>;

    /// Encrypt a Secret manifest into a SealedSecret. Returns the tool's JSON output.
    fn seal(&self, manifest: &str) -> Result<String, AppError>;
}
