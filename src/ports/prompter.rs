use crate::domain::AppError;

/// Port for interactive user input.
pub trait Prompter {
    /// Ask for a visible value.
    fn input(&self, label: &str) -> Result<String, AppError>;

    /// Ask for a hidden value.
    fn password(&self, label: &str) -> Result<String, AppError>;
}
