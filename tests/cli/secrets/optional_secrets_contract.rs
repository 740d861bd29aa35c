use crate::harness::TestContext;

#[test]
fn secrets_cloudflare_and_private_repo_from_environment() {
    let ctx = TestContext::new();
    ctx.write_rendered_distribution();

    ctx.cli()
        .args(["secrets", "generated", "--oauth-type", "external", "--cloudflare", "--private-repo"])
        .env("ARGOFLOW_OIDC_CLIENT_ID", "external-client")
        .env("ARGOFLOW_CLOUDFLARE_API_TOKEN", "cf-token")
        .env("ARGOFLOW_GIT_HTTPS_USERNAME", "git-user")
        .env("ARGOFLOW_GIT_HTTPS_PASSWORD", "git-pass")
        .assert()
        .success();

    let base = "secrets/generated";
    assert!(
        ctx.work_dir().join(format!("{base}/oidc-auth/base/oauth2-proxy-secret.yaml")).is_file()
    );
    let repo = ctx.read(&format!("{base}/argocd/overlays/private-repo/secret.yaml"));
    assert!(repo.contains("name: git-repo-secret"));
    assert!(repo.contains("namespace: argocd"));
    let cert_manager = ctx.read(&format!(
        "{base}/cloudflare-secrets/cloudflare-api-token-secret-cert-manager.yaml"
    ));
    assert!(cert_manager.contains("namespace: cert-manager"));
    let external_dns = ctx.read(&format!(
        "{base}/cloudflare-secrets/cloudflare-api-token-secret-external-dns.yaml"
    ));
    assert!(external_dns.contains("namespace: kube-system"));
    assert!(external_dns.contains("api-token: Y2YtdG9rZW4="));
}
