use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn replace_prints_substituted_file() {
    let ctx = TestContext::new();
    ctx.write(
        "kustomization.yaml",
        "repo: $ARGOFLOW_GIT_REPO_URL\nbranch: $ARGOFLOW_GIT_REPO\nother: $HOME\n",
    );
    ctx.write("setup.conf", "GIT_REPO=from-conf\nGIT_REPO_URL=https://conf.example.com\n");

    ctx.cli()
        .args(["replace", "kustomization.yaml", "--config", "setup.conf"])
        .env("ARGOFLOW_GIT_REPO_URL", "https://github.com/org/argoflow")
        .assert()
        .success()
        .stdout(
            "repo: https://github.com/org/argoflow\nbranch: from-conf\nother: $HOME\n",
        );

    assert!(ctx.read("kustomization.yaml").starts_with("repo: $ARGOFLOW_GIT_REPO_URL"));
}

#[test]
fn replace_inplace_rewrites_file() {
    let ctx = TestContext::new();
    ctx.write("app.yaml", "domain: $ARGOFLOW_DOMAIN\n");

    ctx.cli()
        .args(["replace", "app.yaml", "-i"])
        .env("ARGOFLOW_DOMAIN", "example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced variables in app.yaml"));

    assert_eq!(ctx.read("app.yaml"), "domain: example.com\n");
}

#[test]
fn replace_fails_on_missing_file() {
    let ctx = TestContext::new();

    ctx.cli().args(["replace", "absent.yaml"]).assert().failure().stderr(predicate::str::starts_with("Error:"));
}
