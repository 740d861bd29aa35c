use crate::harness::TestContext;
use predicates::prelude::*;

const VAULT_VALUES: [(&str, &str); 11] = [
    ("ARGOFLOW_USERNAME", "<path:kv/data/argoflow#username>"),
    ("ARGOFLOW_PASSWORD", "<path:kv/data/argoflow#password>"),
    ("ARGOFLOW_EMAIL", "<path:kv/data/argoflow#email>"),
    ("ARGOFLOW_FIRSTNAME", "<path:kv/data/argoflow#firstname>"),
    ("ARGOFLOW_LASTNAME", "<path:kv/data/argoflow#lastname>"),
    ("ARGOFLOW_COOKIE_SECRET", "<path:kv/data/oidc#cookie>"),
    ("ARGOFLOW_OIDC_CLIENT_ID", "<path:kv/data/oidc#id>"),
    ("ARGOFLOW_OIDC_CLIENT_SECRET", "<path:kv/data/oidc#secret>"),
    ("ARGOFLOW_DEX_CONFIG", "<path:kv/data/dex#config>"),
    ("ARGOFLOW_GRAFANA_USERNAME", "<path:kv/data/grafana#username>"),
    ("ARGOFLOW_GRAFANA_PASSWORD", "<path:kv/data/grafana#password>"),
];

#[test]
fn secrets_vault_keeps_references_in_manifests() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();

    ctx.cli()
        .args(["secrets", "vault", "--oauth-type", "dex"])
        .envs(VAULT_VALUES)
        .assert()
        .success();

    let grafana = ctx.read("secrets/vault/monitoring-resources/grafana-admin-secret.yaml");
    assert!(grafana.contains("admin-password: <path:kv/data/grafana#password>"));
    let dex = ctx.read("secrets/vault/oidc-auth/overlays/dex/dex-config-secret.yaml");
    assert!(dex.contains("config.yaml: <path:kv/data/dex#config>"));
}

#[test]
fn secrets_vault_rejects_plain_values() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();

    ctx.cli()
        .args(["secrets", "vault", "--oauth-type", "dex"])
        .envs(VAULT_VALUES)
        .env("ARGOFLOW_GRAFANA_PASSWORD", "hunter2")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Vault secret ARGOFLOW_GRAFANA_PASSWORD should look like <path>",
        ));

    assert!(!ctx.work_dir().join("secrets").exists());
}
