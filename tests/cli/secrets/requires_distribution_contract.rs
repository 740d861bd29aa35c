use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn secrets_require_rendered_distribution() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "dex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'argoflow distribution' first"));

    assert!(ctx.kube().get_log().is_empty());
}

#[test]
fn secrets_check_distribution_before_reading_env_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "dex", "--env-file", "absent.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'argoflow distribution' first"));
}

#[test]
fn secrets_reject_unknown_oauth_type() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'github'"));
}
