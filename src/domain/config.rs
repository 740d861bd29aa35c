//! Layered configuration source.
//!
//! Values resolve from the process environment first, then from a loaded
//! `--env-file`. Settings groups add generated defaults and prompts on top.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::dotenv::parse_dotenv;
use super::error::AppError;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    Environment,
    ConfigFile,
    Default,
    Prompt,
}

impl fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueOrigin::Environment => "environment",
            ValueOrigin::ConfigFile => "env file",
            ValueOrigin::Default => "default",
            ValueOrigin::Prompt => "prompt",
        };
        f.write_str(label)
    }
}

/// Snapshot of the environment plus an optional env-file layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayers {
    environment: BTreeMap<String, String>,
    config_file: BTreeMap<String, String>,
}

impl ConfigLayers {
    /// Create layers from an explicit environment snapshot.
    pub fn new<I, K, V>(environment: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            environment: environment.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            config_file: BTreeMap::new(),
        }
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self::new(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Load a `.env` file as the config-file layer.
    pub fn load_env_file(&mut self, path: &Path) -> Result<(), AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read env file {}: {}", path.display(), e))
        })?;
        self.merge_config_file(parse_dotenv(&content), &path.display().to_string());
        Ok(())
    }

    /// Merge entries into the config-file layer. Environment keys are never shadowed.
    pub fn merge_config_file<I>(&mut self, entries: I, source: &str)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in entries {
            if self.environment.contains_key(&key) {
                info!("{key} is in {source}, but we won't override env vars");
                continue;
            }
            debug!("Setting {key} from {source}");
            self.config_file.insert(key, value);
        }
    }

    /// Look a key up, environment first.
    pub fn lookup(&self, key: &str) -> Option<(&str, ValueOrigin)> {
        if let Some(value) = self.environment.get(key) {
            return Some((value.as_str(), ValueOrigin::Environment));
        }
        self.config_file.get(key).map(|value| (value.as_str(), ValueOrigin::ConfigFile))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Environment variables whose name starts with `prefix`.
    pub fn environment_with_prefix(&self, prefix: &str) -> BTreeMap<String, String> {
        self.environment
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
