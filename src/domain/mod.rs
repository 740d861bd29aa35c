pub mod config;
pub mod dotenv;
pub mod error;
pub mod placeholder;
pub mod secret;
pub mod settings;
pub mod substitution;

use std::collections::BTreeMap;

pub use config::{ConfigLayers, ValueOrigin};
pub use error::AppError;
pub use placeholder::Placeholder;
pub use secret::{OAuthBackend, PlannedSecret, SecretData, SecretFormat, SecretSpec};
pub use settings::{FieldSpec, ResolvedSettings, SettingsGroup};

/// Variables handed to a template render, keyed by namespace.
pub type TemplateContext = BTreeMap<String, minijinja::Value>;
