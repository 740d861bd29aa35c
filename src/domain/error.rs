use std::io;

use thiserror::Error;

/// Library-wide error type for argoflow operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// One or more required variables could not be resolved from any layer.
    #[error("Missing required configuration: {}", .missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },

    /// A resolved value was rejected by its field validator.
    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue { variable: String, reason: String },

    /// The distribution output folder is already present.
    #[error("Distribution folder '{0}' already exists and --force not set")]
    DistributionExists(String),

    /// The rendered distribution is required but missing.
    #[error("Distribution folder '{0}' does not exist. Run 'argoflow distribution' first.")]
    DistributionMissing(String),

    /// The template folder to render from is missing.
    #[error("Template folder '{0}' does not exist")]
    TemplatesMissing(String),

    /// Template loading or rendering failed.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// An external binary (kubectl, kubeseal) failed.
    #[error("Error running '{command}': {details}")]
    ExternalTool { command: String, details: String },

    /// Vault mode found a literal value where a `<path>` reference was expected.
    #[error("Vault secret {variable} should look like <path>")]
    NotAVaultReference { variable: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Interactive input failed or was interrupted.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MissingConfiguration { .. }
            | AppError::InvalidValue { .. }
            | AppError::NotAVaultReference { .. }
            | AppError::TemplateRender { .. }
            | AppError::ParseError { .. }
            | AppError::PasswordHash(_) => io::ErrorKind::InvalidInput,
            AppError::DistributionMissing(_) | AppError::TemplatesMissing(_) => {
                io::ErrorKind::NotFound
            }
            AppError::DistributionExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Prompt { .. } => io::ErrorKind::Interrupted,
            AppError::ExternalTool { .. } => io::ErrorKind::Other,
        }
    }
}
