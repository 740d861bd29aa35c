//! Distribution command - renders the template tree into the distribution folder.

use std::path::PathBuf;

use crate::adapters::distribution_filesystem::{collect_files, remove_dir, write_file};
use crate::adapters::minijinja_renderer::template_name;
use crate::domain::settings::catalog::{DISTRIBUTION_GROUPS, PLACEHOLDER_NAMESPACES};
use crate::domain::{AppError, ConfigLayers, Placeholder, TemplateContext};
use crate::ports::TemplateRenderer;

pub const DEFAULT_TEMPLATES: &str = "template";
pub const DEFAULT_DISTRIBUTION: &str = "distribution";

#[derive(Debug, Clone)]
pub struct DistributionOptions {
    /// Template tree to render.
    pub templates: PathBuf,
    /// Output folder.
    pub output: PathBuf,
    /// Replace an existing output folder.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionOutcome {
    /// Written files, in render order.
    pub files: Vec<PathBuf>,
}

/// `ENV_VAR=<< group.field >>` for every distribution variable.
pub fn help_message() -> String {
    DISTRIBUTION_GROUPS.iter().flat_map(|group| group.help_lines()).collect::<Vec<_>>().join("\n")
}

/// Resolve every distribution group and add the placeholder namespaces.
///
/// Missing variables from all groups are reported together.
pub fn template_context(layers: &ConfigLayers) -> Result<TemplateContext, AppError> {
    let mut context = TemplateContext::new();
    let mut missing = Vec::new();

    for group in DISTRIBUTION_GROUPS {
        match group.resolve(layers) {
            Ok(settings) => {
                context.insert(group.key.to_string(), settings.to_template_value());
            }
            Err(AppError::MissingConfiguration { missing: group_missing }) => {
                missing.extend(group_missing);
            }
            Err(err) => return Err(err),
        }
    }

    if !missing.is_empty() {
        return Err(AppError::MissingConfiguration { missing });
    }

    for namespace in PLACEHOLDER_NAMESPACES {
        context.insert(namespace.to_string(), Placeholder::value(namespace));
    }

    Ok(context)
}

/// Execute the distribution command.
///
/// Every template is rendered before the output folder is touched, so a failed
/// render leaves an existing distribution in place.
/// Template root must exist; an existing output needs `force`.
pub fn check_paths(options: &DistributionOptions) -> Result<(), AppError> {
    if !options.templates.is_dir() {
        return Err(AppError::TemplatesMissing(options.templates.display().to_string()));
    }
    if options.output.exists() && !options.force {
        return Err(AppError::DistributionExists(options.output.display().to_string()));
    }
    Ok(())
}

pub fn execute<R: TemplateRenderer>(
    layers: &ConfigLayers,
    renderer: &R,
    options: &DistributionOptions,
) -> Result<DistributionOutcome, AppError> {
    check_paths(options)?;
    let output_exists = options.output.exists();

    let context = template_context(layers)?;

    let mut rendered = Vec::new();
    for relative in collect_files(&options.templates)? {
        let content = renderer.render(&template_name(&relative), &context)?;
        rendered.push((options.output.join(&relative), content));
    }

    if output_exists {
        remove_dir(&options.output)?;
    }

    let mut files = Vec::with_capacity(rendered.len());
    for (dest, content) in rendered {
        write_file(&dest, &content)?;
        files.push(dest);
    }

    Ok(DistributionOutcome { files })
}
