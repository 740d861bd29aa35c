use std::path::{Path, PathBuf};

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, path_loader};
use tracing::debug;

use crate::domain::{AppError, TemplateContext};
use crate::ports::TemplateRenderer;

/// File-based template renderer with `<< >>` variable delimiters.
///
/// Undefined variables are errors. Blocks (`{% %}`) and comments (`{# #}`) keep their
/// default delimiters.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
    root: PathBuf,
}

impl MiniJinjaRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();

        let syntax = SyntaxConfig::builder().variable_delimiters("<<", ">>").build().map_err(
            |e| AppError::TemplateRender {
                template: root.display().to_string(),
                details: format!("invalid template syntax configuration: {e}"),
            },
        )?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        // Output is YAML and JSON manifests; values are written verbatim.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(path_loader(root.clone()));

        Ok(Self { env, root })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, AppError> {
        let render_error = |err: minijinja::Error| {
            debug!("{}", err.display_debug_info());
            AppError::TemplateRender {
                template: self.root.join(template_name).display().to_string(),
                details: err.to_string(),
            }
        };

        let template = self.env.get_template(template_name).map_err(render_error)?;
        template.render(context).map_err(render_error)
    }
}

/// Template name for a path relative to the renderer root.
pub fn template_name(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
