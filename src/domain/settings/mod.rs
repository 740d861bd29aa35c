//! Settings groups: named sets of fields bound to `ARGOFLOW_*` variables.
//!
//! A field resolves from the environment, then the env file, then its default.
//! Required fields with no value anywhere are collected into a single
//! [`AppError::MissingConfiguration`].

pub mod catalog;
mod generator;

use std::fmt;
use std::sync::Arc;

use minijinja::Value;
use minijinja::value::{Enumerator, Object};
use tracing::debug;

use super::config::{ConfigLayers, ValueOrigin};
use super::error::AppError;

pub use generator::Generator;

/// Validation hook run on every resolved value of a field.
pub type Validator = fn(&str) -> Result<(), String>;

/// Fallback used when no layer provides a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldDefault {
    Required,
    Literal(&'static str),
    Generated(Generator),
}

/// How a field is asked for in interactive mode.
#[derive(Debug, Clone, Copy)]
pub struct PromptSpec {
    pub label: &'static str,
    pub secret: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: FieldDefault,
    pub prompt: Option<PromptSpec>,
    pub validator: Option<Validator>,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self { name, default: FieldDefault::Required, prompt: None, validator: None }
    }

    pub const fn literal(name: &'static str, value: &'static str) -> Self {
        Self { name, default: FieldDefault::Literal(value), prompt: None, validator: None }
    }

    pub const fn generated(name: &'static str, generator: Generator) -> Self {
        Self { name, default: FieldDefault::Generated(generator), prompt: None, validator: None }
    }

    /// Ask for this field with a visible input prompt.
    pub const fn ask(mut self, label: &'static str) -> Self {
        self.prompt = Some(PromptSpec { label, secret: false });
        self
    }

    /// Ask for this field with a hidden password prompt.
    pub const fn ask_secret(mut self, label: &'static str) -> Self {
        self.prompt = Some(PromptSpec { label, secret: true });
        self
    }

    pub const fn validated(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Produce the default value, if the field has one.
    pub fn default_value(&self) -> Option<String> {
        match self.default {
            FieldDefault::Required => None,
            FieldDefault::Literal(value) => Some(value.to_string()),
            FieldDefault::Generated(generator) => Some(generator.generate()),
        }
    }
}

/// A named group of fields sharing an environment variable prefix.
#[derive(Debug, Clone, Copy)]
pub struct SettingsGroup {
    /// Template namespace, e.g. `domain` for `<< domain.root >>`.
    pub key: &'static str,
    pub env_prefix: &'static str,
    pub fields: &'static [FieldSpec],
}

impl SettingsGroup {
    /// Environment variable bound to `field`.
    pub fn env_var(&self, field: &FieldSpec) -> String {
        format!("{}{}", self.env_prefix, field.name.to_uppercase())
    }

    /// `ENV_VAR=<< group.field >>` lines describing every field.
    pub fn help_lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| format!("{}=<< {}.{} >>", self.env_var(field), self.key, field.name))
            .collect()
    }

    /// Resolve every field: environment, then env file, then default.
    pub fn resolve(&self, layers: &ConfigLayers) -> Result<ResolvedSettings, AppError> {
        let mut resolved = Vec::with_capacity(self.fields.len());
        let mut missing = Vec::new();

        for field in self.fields {
            let env_var = self.env_var(field);
            let (value, origin) = match layers.lookup(&env_var) {
                Some((value, origin)) => (value.to_string(), origin),
                None => match field.default_value() {
                    Some(value) => (value, ValueOrigin::Default),
                    None => {
                        missing.push(env_var);
                        continue;
                    }
                },
            };
            debug!("Resolved {env_var} from {origin}");
            resolved.push(ResolvedField { name: field.name, env_var, value, origin });
        }

        if !missing.is_empty() {
            return Err(AppError::MissingConfiguration { missing });
        }

        let settings = ResolvedSettings { group: self.key, fields: resolved };
        settings.validate(self)?;
        Ok(settings)
    }

    /// Build settings from explicit values (prompted or derived).
    ///
    /// Fields not present in `values` fall back to their default; a required field
    /// without a value is reported as missing.
    pub fn with_values(
        &self,
        values: Vec<(&str, String)>,
        origin: ValueOrigin,
    ) -> Result<ResolvedSettings, AppError> {
        let mut resolved = Vec::with_capacity(self.fields.len());
        let mut missing = Vec::new();

        for field in self.fields {
            let env_var = self.env_var(field);
            let explicit = values.iter().find(|(name, _)| *name == field.name);
            let (value, origin) = match explicit {
                Some((_, value)) => (value.clone(), origin),
                None => match field.default_value() {
                    Some(value) => (value, ValueOrigin::Default),
                    None => {
                        missing.push(env_var);
                        continue;
                    }
                },
            };
            debug!("Resolved {env_var} from {origin}");
            resolved.push(ResolvedField { name: field.name, env_var, value, origin });
        }

        if !missing.is_empty() {
            return Err(AppError::MissingConfiguration { missing });
        }

        let settings = ResolvedSettings { group: self.key, fields: resolved };
        settings.validate(self)?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: &'static str,
    pub env_var: String,
    pub value: String,
    pub origin: ValueOrigin,
}

/// Field values of one settings group, in declaration order.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    group: &'static str,
    fields: Vec<ResolvedField>,
}

impl ResolvedSettings {
    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    /// Field value by name. Falls back to a case-insensitive match so templates can
    /// write `<< profile.username >>` for `USERNAME`.
    pub fn get(&self, name: &str) -> Option<&str> {
        lookup_field(&self.fields, name)
    }

    /// Field value by name, as an error when absent.
    pub fn require(&self, name: &str) -> Result<&str, AppError> {
        self.get(name).ok_or_else(|| {
            AppError::config_error(format!("Settings group '{}' has no field '{}'", self.group, name))
        })
    }

    /// Expose the settings to templates as a `group.field` namespace.
    pub fn to_template_value(&self) -> Value {
        Value::from_object(SettingsObject {
            fields: self.fields.iter().map(|f| (f.name.to_string(), f.value.clone())).collect(),
        })
    }

    fn validate(&self, group: &SettingsGroup) -> Result<(), AppError> {
        for resolved in &self.fields {
            let validator =
                group.fields.iter().find(|f| f.name == resolved.name).and_then(|f| f.validator);
            if let Some(validator) = validator {
                validator(&resolved.value).map_err(|reason| AppError::InvalidValue {
                    variable: resolved.env_var.clone(),
                    reason,
                })?;
            }
        }
        Ok(())
    }
}

fn lookup_field<'a>(fields: &'a [ResolvedField], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.name == name)
        .or_else(|| fields.iter().find(|f| f.name.eq_ignore_ascii_case(name)))
        .map(|f| f.value.as_str())
}

struct SettingsObject {
    fields: Vec<(String, String)>,
}

// Values are secrets; keep them out of debug output.
impl fmt::Debug for SettingsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsObject")
            .field("fields", &self.fields.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

impl Object for SettingsObject {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let key = key.as_str()?;
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .or_else(|| self.fields.iter().find(|(name, _)| name.eq_ignore_ascii_case(key)))
            .map(|(_, value)| Value::from(value.as_str()))
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(self.fields.iter().map(|(name, _)| Value::from(name.as_str())).collect())
    }
}
