//! Port interfaces for the generation domain

use crate::generation::{GenerationError, RenderContext};
use crate::infrastructure::templates::TemplateHandle;

/// Maps a license variant name to an installed template
pub trait VariantResolver: Send + Sync {
    /// Resolve a variant by exact (upper-cased) name
    fn resolve(&self, variant: &str) -> Result<TemplateHandle, GenerationError>;

    /// Installed variant names, sorted
    fn variants(&self) -> Vec<String>;
}

/// Expands a license template into themed markup
pub trait TemplateRenderer: Send + Sync {
    /// Render the template with the given context.
    ///
    /// A template resource that cannot be read yields
    /// [`GenerationError::TemplateUnavailable`].
    fn render(
        &self,
        template: &TemplateHandle,
        context: &RenderContext,
    ) -> Result<String, GenerationError>;
}
