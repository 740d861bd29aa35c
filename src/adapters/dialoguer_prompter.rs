use dialoguer::{Input, Password};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts via dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn input(&self, label: &str) -> Result<String, AppError> {
        Input::<String>::new().with_prompt(label).interact_text().map_err(|err| AppError::Prompt {
            what: label.to_string(),
            details: err.to_string(),
        })
    }

    fn password(&self, label: &str) -> Result<String, AppError> {
        Password::new().with_prompt(label).interact().map_err(|err| AppError::Prompt {
            what: label.to_string(),
            details: err.to_string(),
        })
    }
}
