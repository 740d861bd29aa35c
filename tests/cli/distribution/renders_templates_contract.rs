use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn distribution_renders_every_template() {
    let ctx = TestContext::new();
    ctx.write_distribution_inputs();

    ctx.cli()
        .args(["distribution", "--env-file", "setup.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 3 file(s) into distribution/"))
        .stderr(predicate::str::contains("Wrote distribution/argocd/applications/kubeflow.yaml"));

    assert_eq!(
        ctx.read("distribution/argocd/applications/kubeflow.yaml"),
        "repoURL: https://github.com/org/argoflow\ntargetRevision: master\n"
    );
    assert_eq!(
        ctx.read("distribution/cert-manager/cluster-issuer.yaml"),
        "email: info@example.com\nhost: kubeflow.example.com\n"
    );
}

#[test]
fn distribution_keeps_placeholders_for_later_steps() {
    let ctx = TestContext::new();
    ctx.write_distribution_inputs();

    ctx.cli()
        .args(["distribution", "--env-file", "setup.env"])
        .assert()
        .success()
        .stderr(predicate::str::contains("<< profile.email >> is a DUMMY!"));

    assert_eq!(
        ctx.read("distribution/oidc-auth/overlays/dex/dex-config-template.yaml"),
        "staticPasswords:\n- email: << profile.email >>\n"
    );
}

#[test]
fn distribution_environment_wins_over_env_file() {
    let ctx = TestContext::new();
    ctx.write_distribution_inputs();

    ctx.cli()
        .args(["distribution", "--env-file", "setup.env"])
        .env("ARGOFLOW_DOMAIN_ROOT", "override.io")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "ARGOFLOW_DOMAIN_ROOT is in setup.env, but we won't override env vars",
        ));

    assert!(ctx.read("distribution/cert-manager/cluster-issuer.yaml").contains("kubeflow.override.io"));
}
