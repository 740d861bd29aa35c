use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, SecretData, SecretSpec};
use crate::ports::ManifestTool;

pub const DEFAULT_KUBECTL: &str = "kubectl";
pub const DEFAULT_KUBESEAL: &str = "kubeseal";

/// `ManifestTool` backed by the `kubectl` and `kubeseal` binaries.
#[derive(Debug, Clone)]
pub struct KubectlCommandAdapter {
    kubectl: String,
    kubeseal: String,
}

impl KubectlCommandAdapter {
    pub fn new(kubectl: impl Into<String>, kubeseal: impl Into<String>) -> Self {
        Self { kubectl: kubectl.into(), kubeseal: kubeseal.into() }
    }

    /// Run `program` with `args`, optionally feeding `stdin`.
    ///
    /// `describe` is used in errors instead of the full argument list, which may
    /// carry secret literals.
    fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&str>,
        describe: &str,
    ) -> Result<String, AppError> {
        let tool_error = |details: String| AppError::ExternalTool {
            command: describe.to_string(),
            details,
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Running {describe}");
        let mut child = command.spawn().map_err(|e| tool_error(e.to_string()))?;

        // The pipe is closed before waiting; a tool that exits early still gets reaped.
        let written = match (stdin, child.stdin.take()) {
            (Some(input), Some(mut pipe)) => pipe.write_all(input.as_bytes()),
            _ => Ok(()),
        };

        let output = child.wait_with_output().map_err(|e| tool_error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(tool_error(if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            }));
        }
        written.map_err(|e| tool_error(e.to_string()))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Arguments for `kubectl create --dry-run=client -o yaml secret generic ...`.
pub fn create_secret_args(spec: &SecretSpec) -> Vec<String> {
    let mut args: Vec<String> =
        ["create", "--dry-run=client", "-o", "yaml", "secret", "generic", "-n"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    args.push(spec.namespace.clone());
    args.push(spec.name.clone());

    match &spec.data {
        SecretData::Literals(pairs) => {
            args.extend(pairs.iter().map(|(k, v)| format!("--from-literal={k}={v}")));
        }
        SecretData::File { filename, .. } => {
            args.push(format!("--from-file={filename}=/dev/stdin"));
        }
    }
    args
}

impl ManifestTool for KubectlCommandAdapter {
    fn create_secret(&self, spec: &SecretSpec) -> Result<String, AppError> {
        let describe = format!(
            "{} create secret generic -n {} {}",
            self.kubectl, spec.namespace, spec.name
        );
        let stdin = match &spec.data {
            SecretData::Literals(_) => None,
            SecretData::File { contents, .. } => Some(contents.as_str()),
        };
        self.run(&self.kubectl, &create_secret_args(spec), stdin, &describe)
    }

    fn seal(&self, manifest: &str) -> Result<String, AppError> {
        self.run(&self.kubeseal, &[], Some(manifest), &self.kubeseal)
    }
}
