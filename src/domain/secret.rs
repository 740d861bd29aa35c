//! Kubernetes Secret definitions and their output encodings.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::AppError;

/// Payload of a Secret.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretData {
    /// `key=value` literals, in order.
    Literals(Vec<(String, String)>),
    /// A single file entry whose contents are piped in.
    File { filename: String, contents: String },
}

// Secret payloads never appear in debug output.
impl fmt::Debug for SecretData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretData::Literals(pairs) => f
                .debug_tuple("Literals")
                .field(&pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
                .finish(),
            SecretData::File { filename, .. } => {
                f.debug_struct("File").field("filename", filename).finish_non_exhaustive()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSpec {
    pub name: String,
    pub namespace: String,
    pub data: SecretData,
}

impl SecretSpec {
    pub fn literals(name: &str, namespace: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            data: SecretData::Literals(
                pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            ),
        }
    }

    pub fn file(name: &str, namespace: &str, filename: &str, contents: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            data: SecretData::File { filename: filename.to_string(), contents: contents.to_string() },
        }
    }

    /// Every plaintext value carried by the secret.
    pub fn plain_values(&self) -> Vec<&str> {
        match &self.data {
            SecretData::Literals(pairs) => pairs.iter().map(|(_, v)| v.as_str()).collect(),
            SecretData::File { contents, .. } => vec![contents.as_str()],
        }
    }
}

/// A secret together with its path relative to the output folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSecret {
    pub path: String,
    pub spec: SecretSpec,
}

/// How secrets are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretFormat {
    /// Print `ARGOFLOW_*="value"` lines only.
    Raw,
    /// Plain `kubectl` Secret manifests.
    Generated,
    /// Manifests whose values are `<path>` references for the vault plugin.
    Vault,
    /// `kubeseal`-encrypted SealedSecret manifests.
    Sealed,
}

impl SecretFormat {
    /// Name of the output subfolder.
    pub fn as_str(self) -> &'static str {
        match self {
            SecretFormat::Raw => "raw",
            SecretFormat::Generated => "generated",
            SecretFormat::Vault => "vault",
            SecretFormat::Sealed => "sealed",
        }
    }
}

impl fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth provider fronting the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthBackend {
    Dex,
    Keycloak,
    External,
}

impl OAuthBackend {
    /// Overlay folder the oauth secrets belong to.
    pub fn overlay_dir(self) -> &'static str {
        match self {
            OAuthBackend::Dex => "oidc-auth/overlays/dex",
            OAuthBackend::Keycloak => "oidc-auth/overlays/keycloak",
            OAuthBackend::External => "oidc-auth/base",
        }
    }
}

/// Whether a value looks like a vault `<path>` reference.
pub fn is_vault_reference(value: &str) -> bool {
    value.starts_with('<') && value.ends_with('>')
}

/// Undo the base64 encoding of every plaintext value in a generated manifest.
///
/// The vault plugin reads `<path>` references straight from the manifest, so they
/// must not be stored as `base64("<path>")`.
pub fn restore_plain_values(manifest: &str, spec: &SecretSpec) -> String {
    let mut output = manifest.to_string();
    for value in spec.plain_values() {
        let encoded = STANDARD.encode(value.as_bytes());
        output = output.replace(&encoded, value);
    }
    output
}

/// `ENV_VAR="value"` with newlines escaped, suitable for an env file.
pub fn format_raw_line(env_var: &str, value: &str) -> String {
    format!("{}=\"{}\"", env_var, value.replace('\n', "\\n"))
}

/// Re-emit kubeseal's JSON output as YAML.
pub fn sealed_json_to_yaml(json: &str) -> Result<String, AppError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| AppError::ParseError {
        what: "kubeseal output".to_string(),
        details: e.to_string(),
    })?;
    serde_yaml::to_string(&value).map_err(|e| AppError::ParseError {
        what: "sealed secret".to_string(),
        details: e.to_string(),
    })
}
