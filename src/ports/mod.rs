mod manifest_tool;
mod prompter;
mod template_renderer;

pub use manifest_tool::ManifestTool;
pub use prompter::Prompter;
pub use template_renderer::TemplateRenderer;
