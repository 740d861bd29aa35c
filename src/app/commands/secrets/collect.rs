//! Which values and secrets a run produces.

use tracing::info;

use crate::app::AppContext;
use crate::domain::settings::catalog::{
    CLOUDFLARE_TOKEN, DEX, DEX_VALUES, GRAFANA, KEYCLOAK, KUBEFLOW_REALM, OIDC, PRIVATE_REPO,
    PROFILE,
};
use crate::domain::{
    AppError, OAuthBackend, PlannedSecret, ResolvedSettings, SecretSpec, SettingsGroup,
    TemplateContext, ValueOrigin,
};
use crate::ports::{ManifestTool, Prompter, TemplateRenderer};

pub const DEX_CONFIG_TEMPLATE: &str = "oidc-auth/overlays/dex/dex-config-template.yaml";
pub const KUBEFLOW_REALM_TEMPLATE: &str = "oidc-auth/overlays/keycloak/kubeflow-realm-template.json";

/// bcrypt cost Dex expects for static passwords.
const DEX_BCRYPT_COST: u32 = 12;

/// Flags that shape the collected plan.
#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    pub oauth: OAuthBackend,
    pub cloudflare: bool,
    pub private_repo: bool,
    pub interactive: bool,
}

/// Every settings group collected during a run, and the secrets built from them.
#[derive(Debug, Clone)]
pub struct SecretPlan {
    pub values: Vec<ResolvedSettings>,
    pub secrets: Vec<PlannedSecret>,
}

impl SecretPlan {
    fn add(&mut self, path: String, spec: SecretSpec) {
        self.secrets.push(PlannedSecret { path, spec });
    }
}

pub fn collect<M, P, R>(
    ctx: &AppContext<M, P, R>,
    options: CollectOptions,
) -> Result<SecretPlan, AppError>
where
    M: ManifestTool,
    P: Prompter,
    R: TemplateRenderer,
{
    let mut plan = SecretPlan { values: Vec::new(), secrets: Vec::new() };

    let profile = if options.interactive {
        prompt_group(ctx, &PROFILE)?
    } else {
        PROFILE.resolve(ctx.layers())?
    };
    plan.values.push(profile.clone());

    // External providers need real client credentials, not generated ones.
    let oidc_client_id = OIDC.env_var(&OIDC.fields[1]);
    let oidc = if options.oauth == OAuthBackend::External && !ctx.layers().contains(&oidc_client_id) {
        prompt_group(ctx, &OIDC)?
    } else {
        OIDC.resolve(ctx.layers())?
    };
    plan.values.push(oidc.clone());

    let overlay = options.oauth.overlay_dir();
    plan.add(
        format!("{overlay}/oauth2-proxy-secret.yaml"),
        SecretSpec::literals(
            "oauth2-proxy",
            "auth",
            &[
                ("client-id", oidc.require("OIDC_CLIENT_ID")?),
                ("client-secret", oidc.require("OIDC_CLIENT_SECRET")?),
                ("cookie-secret", oidc.require("COOKIE_SECRET")?),
            ],
        ),
    );

    match options.oauth {
        OAuthBackend::Dex => {
            let dex = dex_config(ctx, &profile, &oidc)?;
            plan.add(
                format!("{overlay}/dex-config-secret.yaml"),
                SecretSpec::file("dex-config", "auth", "config.yaml", dex.require("DEX_CONFIG")?),
            );
            plan.values.push(dex);
        }
        OAuthBackend::Keycloak => {
            let realm = kubeflow_realm(ctx, &profile, &oidc)?;
            plan.add(
                format!("{overlay}/kubeflow-realm-secret.yaml"),
                SecretSpec::file(
                    "kubeflow-realm",
                    "auth",
                    "kubeflow-realm.json",
                    realm.require("KUBEFLOW_REALM")?,
                ),
            );
            plan.values.push(realm);

            let keycloak = KEYCLOAK.resolve(ctx.layers())?;
            plan.add(
                format!("{overlay}/keycloak-secret.yaml"),
                SecretSpec::literals(
                    "keycloak-secret",
                    "auth",
                    &[
                        ("admin-password", keycloak.require("KEYCLOAK_ADMIN_PASS")?),
                        ("database-password", keycloak.require("DATABASE_PASS")?),
                        ("management-password", keycloak.require("KEYCLOAK_MANAGEMENT_PASS")?),
                    ],
                ),
            );
            plan.add(
                format!("{overlay}/postgresql-secret.yaml"),
                SecretSpec::literals(
                    "keycloak-postgresql",
                    "auth",
                    &[
                        ("postgresql-password", keycloak.require("DATABASE_PASS")?),
                        ("postgresql-postgres-password", keycloak.require("POSTGRESQL_PASS")?),
                    ],
                ),
            );
            plan.values.push(keycloak);
        }
        OAuthBackend::External => {}
    }

    if options.private_repo {
        let repo = resolve_or_prompt(ctx, &PRIVATE_REPO)?;
        plan.add(
            "argocd/overlays/private-repo/secret.yaml".to_string(),
            SecretSpec::literals(
                "git-repo-secret",
                "argocd",
                &[
                    ("HTTPS_USERNAME", repo.require("GIT_HTTPS_USERNAME")?),
                    ("HTTPS_PASSWORD", repo.require("GIT_HTTPS_PASSWORD")?),
                ],
            ),
        );
        plan.values.push(repo);
    }

    let grafana = if options.interactive {
        prompt_group(ctx, &GRAFANA)?
    } else {
        GRAFANA.resolve(ctx.layers())?
    };
    plan.add(
        "monitoring-resources/grafana-admin-secret.yaml".to_string(),
        SecretSpec::literals(
            "grafana-admin-secret",
            "monitoring",
            &[
                ("admin-user", grafana.require("GRAFANA_USERNAME")?),
                ("admin-password", grafana.require("GRAFANA_PASSWORD")?),
            ],
        ),
    );
    plan.values.push(grafana);

    if options.cloudflare {
        let cloudflare = resolve_or_prompt(ctx, &CLOUDFLARE_TOKEN)?;
        let token = cloudflare.require("CLOUDFLARE_API_TOKEN")?;
        for (suffix, namespace) in [("cert-manager", "cert-manager"), ("external-dns", "kube-system")] {
            plan.add(
                format!("cloudflare-secrets/cloudflare-api-token-secret-{suffix}.yaml"),
                SecretSpec::literals("cloudflare-api-token-secret", namespace, &[("api-token", token)]),
            );
        }
        plan.values.push(cloudflare);
    }

    Ok(plan)
}

/// Ask for every promptable field of `group`; the rest fall back to defaults.
fn prompt_group<M, P, R>(
    ctx: &AppContext<M, P, R>,
    group: &SettingsGroup,
) -> Result<ResolvedSettings, AppError>
where
    M: ManifestTool,
    P: Prompter,
    R: TemplateRenderer,
{
    let mut values = Vec::new();
    for field in group.fields {
        let Some(prompt) = field.prompt else {
            continue;
        };
        let value = if prompt.secret {
            ctx.prompter().password(prompt.label)?
        } else {
            ctx.prompter().input(prompt.label)?
        };
        values.push((field.name, value));
    }
    group.with_values(values, ValueOrigin::Prompt)
}

fn resolve_or_prompt<M, P, R>(
    ctx: &AppContext<M, P, R>,
    group: &SettingsGroup,
) -> Result<ResolvedSettings, AppError>
where
    M: ManifestTool,
    P: Prompter,
    R: TemplateRenderer,
{
    match group.resolve(ctx.layers()) {
        Err(AppError::MissingConfiguration { missing }) => {
            info!("{} not set, asking instead", missing.join(", "));
            prompt_group(ctx, group)
        }
        other => other,
    }
}

/// `DEX_CONFIG` from the environment, or rendered from the dex template.
fn dex_config<M, P, R>(
    ctx: &AppContext<M, P, R>,
    profile: &ResolvedSettings,
    oidc: &ResolvedSettings,
) -> Result<ResolvedSettings, AppError>
where
    M: ManifestTool,
    P: Prompter,
    R: TemplateRenderer,
{
    match DEX.resolve(ctx.layers()) {
        Err(AppError::MissingConfiguration { .. }) => {}
        other => return other,
    }

    let dex_values = match DEX_VALUES.resolve(ctx.layers()) {
        Err(AppError::MissingConfiguration { .. }) => derive_dex_values(profile)?,
        other => other?,
    };

    let context = TemplateContext::from([
        ("profile".to_string(), profile.to_template_value()),
        ("dex".to_string(), dex_values.to_template_value()),
        ("oidc".to_string(), oidc.to_template_value()),
    ]);
    let config = ctx.templates().render(DEX_CONFIG_TEMPLATE, &context)?;
    DEX.with_values(vec![("DEX_CONFIG", config)], ValueOrigin::Default)
}

/// Admin password plus the bcrypt hash Dex stores for it.
pub fn derive_dex_values(profile: &ResolvedSettings) -> Result<ResolvedSettings, AppError> {
    let password = profile.require("PASSWORD")?;
    let hashed = bcrypt::hash_with_result(password, DEX_BCRYPT_COST)?
        .format_for_version(bcrypt::Version::TwoY);
    DEX_VALUES.with_values(
        vec![("ADMIN_PASS", password.to_string()), ("ADMIN_PASS_DEX", hashed)],
        ValueOrigin::Default,
    )
}

/// `KUBEFLOW_REALM` from the environment, or rendered from the realm template.
fn kubeflow_realm<M, P, R>(
    ctx: &AppContext<M, P, R>,
    profile: &ResolvedSettings,
    oidc: &ResolvedSettings,
) -> Result<ResolvedSettings, AppError>
where
    M: ManifestTool,
    P: Prompter,
    R: TemplateRenderer,
{
    match KUBEFLOW_REALM.resolve(ctx.layers()) {
        Err(AppError::MissingConfiguration { .. }) => {}
        other => return other,
    }

    let context = TemplateContext::from([
        ("profile".to_string(), profile.to_template_value()),
        ("oidc".to_string(), oidc.to_template_value()),
    ]);
    let realm = ctx.templates().render(KUBEFLOW_REALM_TEMPLATE, &context)?;
    KUBEFLOW_REALM.with_values(vec![("KUBEFLOW_REALM", realm)], ValueOrigin::Default)
}
