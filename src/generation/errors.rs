//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while generating license text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("A copyright holder is required. Use -n/--name or --interactive")]
    MissingCopyrightHolder,

    #[error("Unsupported license variant \"{variant}\". Supported: {}", supported.join(", "))]
    UnsupportedVariant {
        variant: String,
        supported: Vec<String>,
    },

    /// Template resource could not be read at render time. The orchestrator
    /// reports this to callers as `UnsupportedVariant`.
    #[error("Template for license variant \"{0}\" is unavailable")]
    TemplateUnavailable(String),

    #[error("Malformed license template: {0}")]
    MalformedTemplate(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Invalid year \"{0}\": expected an integer")]
    InvalidYear(String),
}

impl GenerationError {
    /// Create a new unsupported variant error
    pub fn unsupported<S: Into<String>>(variant: S, supported: Vec<String>) -> Self {
        Self::UnsupportedVariant {
            variant: variant.into(),
            supported,
        }
    }

    /// Create a new malformed template error
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedTemplate(reason.into())
    }

    /// Whether the error stems from caller input rather than the installed templates
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCopyrightHolder
                | Self::UnsupportedVariant { .. }
                | Self::TemplateUnavailable(_)
                | Self::InvalidYear(_)
        )
    }
}
