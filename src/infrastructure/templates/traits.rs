//! Template repository traits for the infrastructure layer

use crate::infrastructure::templates::{TemplateError, TemplateHandle};
use async_trait::async_trait;
use std::path::Path;

/// Source of installed license templates
pub trait TemplateRepository: Send + Sync {
    /// List all templates available in the repository
    fn list_templates(&self) -> Vec<TemplateHandle>;
}

/// Loads license templates from a user-supplied location
///
/// This trait is used when the user provides a --template-dir flag
#[async_trait]
pub trait TemplateLoader: Send + Sync {
    /// Discover every license template under `path`
    async fn load_templates(&self, path: &Path) -> Result<Vec<TemplateHandle>, TemplateError>;
}
