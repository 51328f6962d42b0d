//! Application layer error types

use thiserror::Error;

use crate::generation::GenerationError;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    GenerationError(#[from] GenerationError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Prompt error: {0}")]
    PromptError(String),
}

impl ApplicationError {
    /// The underlying generation error, if any
    pub fn as_generation_error(&self) -> Option<&GenerationError> {
        match self {
            Self::GenerationError(e) => Some(e),
            _ => None,
        }
    }
}
