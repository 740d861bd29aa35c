//! The settings groups argoflow knows about.

use url::Url;

use super::{FieldSpec, Generator, SettingsGroup};

// =============================================================================
// Distribution variables (`<< group.field >>` in the template tree)
// =============================================================================

pub const GIT_REPO: SettingsGroup = SettingsGroup {
    key: "git_repo",
    env_prefix: "ARGOFLOW_GIT_REPO_",
    fields: &[
        FieldSpec::required("url").validated(validate_url),
        FieldSpec::literal("target_revision", "master"),
    ],
};

pub const DOMAIN: SettingsGroup = SettingsGroup {
    key: "domain",
    env_prefix: "ARGOFLOW_DOMAIN_",
    fields: &[
        FieldSpec::required("root"),
        FieldSpec::literal("dashboard", "kubeflow"),
        FieldSpec::literal("serving", "serving"),
        FieldSpec::literal("argocd", "argocd"),
        FieldSpec::literal("auth", "auth"),
        FieldSpec::literal("grafana", "grafana"),
        FieldSpec::literal("kiali", "kiali"),
        FieldSpec::literal("kubecost", "kubecost"),
    ],
};

pub const CERT_MANAGER: SettingsGroup = SettingsGroup {
    key: "cert_manager",
    env_prefix: "ARGOFLOW_CERT_MANAGER_",
    fields: &[
        FieldSpec::literal("email_user", "info"),
        FieldSpec::required("email_domain"),
        FieldSpec::literal("server", "https://acme-staging-v02.api.letsencrypt.org/directory")
            .validated(validate_url),
    ],
};

pub const CLOUDFLARE_ACCOUNT: SettingsGroup = SettingsGroup {
    key: "cloudflare",
    env_prefix: "ARGOFLOW_CLOUDFLARE_",
    fields: &[FieldSpec::required("email")],
};

/// Groups every distribution render needs.
pub const DISTRIBUTION_GROUPS: [SettingsGroup; 4] = [GIT_REPO, DOMAIN, CERT_MANAGER, CLOUDFLARE_ACCOUNT];

/// Namespaces that are filled in later (by the secrets step or not at all).
/// Templates referencing them render `<< namespace.path >>` back out.
pub const PLACEHOLDER_NAMESPACES: [&str; 6] = ["rds", "s3", "profile", "dex", "keycloak", "oidc"];

// =============================================================================
// Secret variables (`ARGOFLOW_<FIELD>`)
// =============================================================================

pub const PROFILE: SettingsGroup = SettingsGroup {
    key: "profile",
    env_prefix: "ARGOFLOW_",
    fields: &[
        FieldSpec::literal("USERNAME", "argoflow").ask("Kubeflow Username"),
        FieldSpec::generated("PASSWORD", Generator::UrlSafeToken(24))
            .ask_secret("Kubeflow Password"),
        FieldSpec::literal("EMAIL", "argoflow@argoflow.org").ask("Kubeflow Email"),
        FieldSpec::literal("FIRSTNAME", "argo").ask("Firstname"),
        FieldSpec::literal("LASTNAME", "flow").ask("Lastname"),
    ],
};

pub const GRAFANA: SettingsGroup = SettingsGroup {
    key: "grafana",
    env_prefix: "ARGOFLOW_",
    fields: &[
        FieldSpec::literal("GRAFANA_USERNAME", "grafana").ask("Grafana Username"),
        FieldSpec::generated("GRAFANA_PASSWORD", Generator::UrlSafeToken(24))
            .ask_secret("Grafana Password"),
    ],
};

pub const OIDC: SettingsGroup = SettingsGroup {
    key: "oidc",
    env_prefix: "ARGOFLOW_",
    fields: &[
        FieldSpec::generated("COOKIE_SECRET", Generator::HexToken(16)),
        FieldSpec::generated("OIDC_CLIENT_ID", Generator::UrlSafeToken(16))
            .ask_secret("OIDC Client ID"),
        FieldSpec::generated("OIDC_CLIENT_SECRET", Generator::UrlSafeToken(32))
            .ask_secret("OIDC Client Secret"),
    ],
};

pub const KEYCLOAK: SettingsGroup = SettingsGroup {
    key: "keycloak",
    env_prefix: "ARGOFLOW_",
    fields: &[
        FieldSpec::generated("DATABASE_PASS", Generator::UrlSafeToken(16)),
        FieldSpec::generated("POSTGRESQL_PASS", Generator::UrlSafeToken(16)),
        FieldSpec::generated("KEYCLOAK_ADMIN_PASS", Generator::UrlSafeToken(16)),
        FieldSpec::generated("KEYCLOAK_MANAGEMENT_PASS", Generator::UrlSafeToken(16)),
    ],
};

pub const KUBEFLOW_REALM: SettingsGroup = SettingsGroup {
    key: "kubeflow_realm",
    env_prefix: "ARGOFLOW_",
    fields: &[FieldSpec::required("KUBEFLOW_REALM")],
};

pub const DEX_VALUES: SettingsGroup = SettingsGroup {
    key: "dex",
    env_prefix: "ARGOFLOW_",
    fields: &[FieldSpec::required("ADMIN_PASS"), FieldSpec::required("ADMIN_PASS_DEX")],
};

pub const DEX: SettingsGroup = SettingsGroup {
    key: "dex_config",
    env_prefix: "ARGOFLOW_",
    fields: &[FieldSpec::required("DEX_CONFIG")],
};

pub const CLOUDFLARE_TOKEN: SettingsGroup = SettingsGroup {
    key: "cloudflare",
    env_prefix: "ARGOFLOW_",
    fields: &[FieldSpec::required("CLOUDFLARE_API_TOKEN").ask_secret("CloudFlare API Key")],
};

pub const PRIVATE_REPO: SettingsGroup = SettingsGroup {
    key: "repo",
    env_prefix: "ARGOFLOW_",
    fields: &[
        FieldSpec::required("GIT_HTTPS_USERNAME").ask("Git repo Username"),
        FieldSpec::required("GIT_HTTPS_PASSWORD").ask_secret("Git repo Password"),
    ],
};

fn validate_url(value: &str) -> Result<(), String> {
    Url::parse(value).map(|_| ()).map_err(|e| format!("'{value}' is not a valid URL: {e}"))
}
