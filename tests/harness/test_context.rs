//! Shared testing harness for `argoflow` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeKubeTools;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    kube: FakeKubeTools,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, kube: FakeKubeTools::new() }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn kube(&self) -> &FakeKubeTools {
        &self.kube
    }

    /// Build a command for invoking the compiled `argoflow` binary.
    ///
    /// The inherited environment is dropped so stray `ARGOFLOW_*` variables cannot
    /// leak into a test; only `PATH` is kept for the fake tool scripts.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("argoflow").expect("Failed to locate argoflow binary");
        cmd.current_dir(&self.work_dir)
            .env_clear()
            .env("HOME", self.home())
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .env("ARGOFLOW_KUBECTL", self.kube.kubectl())
            .env("ARGOFLOW_KUBESEAL", self.kube.kubeseal());
        cmd
    }

    /// Write a file relative to the work directory, creating parent folders.
    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directory");
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Minimal template tree plus an env file covering every required variable.
    pub(crate) fn write_distribution_inputs(&self) {
        self.write(
            "template/argocd/applications/kubeflow.yaml",
            "repoURL: << git_repo.url >>\ntargetRevision: << git_repo.target_revision >>\n",
        );
        self.write(
            "template/oidc-auth/overlays/dex/dex-config-template.yaml",
            "staticPasswords:\n- email: << profile.email >>\n",
        );
        self.write(
            "template/cert-manager/cluster-issuer.yaml",
            "email: << cert_manager.email_user >>@<< cert_manager.email_domain >>\nhost: << domain.dashboard >>.<< domain.root >>\n",
        );
        self.write(
            "setup.env",
            "# Argoflow\nARGOFLOW_GIT_REPO_URL=https://github.com/org/argoflow\nARGOFLOW_DOMAIN_ROOT=example.com\nARGOFLOW_CERT_MANAGER_EMAIL_DOMAIN=example.com\nARGOFLOW_CLOUDFLARE_EMAIL=ops@example.com\n",
        );
    }

    /// A distribution folder holding the templates the secrets command renders.
    pub(crate) fn write_rendered_distribution(&self) {
        self.write(
            "distribution/oidc-auth/overlays/dex/dex-config-template.yaml",
            "staticPasswords:\n- email: << profile.email >>\n  hash: << dex.admin_pass_dex >>\nclientID: << oidc.oidc_client_id >>\n",
        );
        self.write(
            "distribution/oidc-auth/overlays/keycloak/kubeflow-realm-template.json",
            "{\"realm\": \"kubeflow\", \"user\": \"<< profile.username >>\"}\n",
        );
    }
}
