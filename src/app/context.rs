use crate::domain::ConfigLayers;
use crate::ports::{ManifestTool, Prompter, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<M: ManifestTool, P: Prompter, R: TemplateRenderer> {
    layers: ConfigLayers,
    manifests: M,
    prompter: P,
    templates: R,
}

impl<M: ManifestTool, P: Prompter, R: TemplateRenderer> AppContext<M, P, R> {
    /// Create a new application context.
    pub fn new(layers: ConfigLayers, manifests: M, prompter: P, templates: R) -> Self {
        Self { layers, manifests, prompter, templates }
    }

    /// Get the layered configuration source.
    pub fn layers(&self) -> &ConfigLayers {
        &self.layers
    }

    /// Get a reference to the manifest tool.
    pub fn manifests(&self) -> &M {
        &self.manifests
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the template renderer.
    pub fn templates(&self) -> &R {
        &self.templates
    }
}
