//! Error types for the template infrastructure layer

use thiserror::Error;

/// Errors that can occur in template operations
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template not found at the specified location
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template resource is not valid UTF-8
    #[error("Template {0} is not valid UTF-8")]
    InvalidEncoding(String),

    /// IO error during template operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TemplateError {
    /// Create a new template not found error with path
    pub fn not_found<S: Into<String>>(path: S) -> Self {
        Self::TemplateNotFound(path.into())
    }

    /// Whether the resource is simply absent, as opposed to unreadable
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::TemplateNotFound(_) => true,
            Self::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            Self::InvalidEncoding(_) => false,
        }
    }
}
