use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{AppError, SecretData, SecretSpec};
use crate::ports::ManifestTool;

/// Renders kubectl-shaped manifests in-process and records every call.
#[derive(Default)]
pub struct FakeManifestTool {
    pub created: Mutex<Vec<SecretSpec>>,
    pub sealed: Mutex<Vec<String>>,
}

impl FakeManifestTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created.lock().unwrap().iter().map(|s| s.name.clone()).collect()
    }
}

impl ManifestTool for FakeManifestTool {
    fn create_secret(&self, spec: &SecretSpec) -> Result<String, AppError> {
        self.created.lock().unwrap().push(spec.clone());

        let mut manifest = String::from("apiVersion: v1\ndata:\n");
        let entries: Vec<(String, String)> = match &spec.data {
            SecretData::Literals(pairs) => pairs.clone(),
            SecretData::File { filename, contents } => vec![(filename.clone(), contents.clone())],
        };
        for (key, value) in entries {
            manifest.push_str(&format!("  {}: {}\n", key, STANDARD.encode(value)));
        }
        manifest.push_str(&format!(
            "kind: Secret\nmetadata:\n  creationTimestamp: null\n  name: {}\n  namespace: {}\n",
            spec.name, spec.namespace
        ));
        Ok(manifest)
    }

    fn seal(&self, manifest: &str) -> Result<String, AppError> {
        self.sealed.lock().unwrap().push(manifest.to_string());
        Ok(format!(
            r#"{{"apiVersion":"bitnami.com/v1alpha1","kind":"SealedSecret","spec":{{"encryptedData":{{"len":"{}"}}}}}}"#,
            manifest.len()
        ))
    }
}
