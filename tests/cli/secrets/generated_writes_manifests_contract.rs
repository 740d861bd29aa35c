use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn secrets_generated_writes_manifests_per_overlay() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "dex"])
        .env("ARGOFLOW_DEX_CONFIG", "issuer: https://auth.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 secret(s) to secrets/"));

    let grafana = ctx.read("secrets/generated/monitoring-resources/grafana-admin-secret.yaml");
    assert!(grafana.contains("name: grafana-admin-secret"));
    assert!(grafana.contains("namespace: monitoring"));
    assert!(grafana.contains("admin-user: Z3JhZmFuYQ=="));
    assert!(
        ctx.work_dir()
            .join("secrets/generated/oidc-auth/overlays/dex/oauth2-proxy-secret.yaml")
            .is_file()
    );

    let log = ctx.kube().get_log();
    assert!(log.contains("--from-file=config.yaml=/dev/stdin"));
    assert!(log.contains("-n auth oauth2-proxy"));
}

#[test]
fn secrets_generated_skips_existing_files_unless_overwrite() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();
    let existing =
        ctx.write("secrets/generated/monitoring-resources/grafana-admin-secret.yaml", "kept\n");

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "dex"])
        .env("ARGOFLOW_DEX_CONFIG", "issuer: x")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 1 existing file(s)"))
        .stderr(predicate::str::contains("exists, not overwriting"));
    assert_eq!(std::fs::read_to_string(&existing).unwrap(), "kept\n");

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "dex", "--overwrite"])
        .env("ARGOFLOW_DEX_CONFIG", "issuer: x")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped").not());
    assert!(std::fs::read_to_string(&existing).unwrap().contains("kind: Secret"));
}

#[test]
fn secrets_keycloak_renders_realm_from_distribution() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "keycloak"])
        .env("ARGOFLOW_USERNAME", "ada")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 secret(s)"));

    let realm =
        ctx.read("secrets/generated/oidc-auth/overlays/keycloak/kubeflow-realm-secret.yaml");
    assert!(realm.contains("name: kubeflow-realm"));
    assert!(
        ctx.work_dir()
            .join("secrets/generated/oidc-auth/overlays/keycloak/postgresql-secret.yaml")
            .is_file()
    );
    assert!(ctx.kube().get_log().contains("--from-file=kubeflow-realm.json=/dev/stdin"));
}
