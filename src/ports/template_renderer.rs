use crate::domain::{AppError, TemplateContext};

/// Port for rendering a named template with `<< namespace.key >>` variables.
pub trait TemplateRenderer {
    /// Render the template at `template_name` (relative to the renderer's root).
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, AppError>;
}
