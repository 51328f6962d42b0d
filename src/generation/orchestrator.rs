//! Generation orchestration - coordinates the license generation workflow

use crate::generation::{
    DEFAULT_THEME, GenerationError, GenerationRequest, LicenseText, RawLicenseParams,
    RenderContext, TemplateRenderer, VariantResolver, extractor, normalizer,
};
use std::sync::Arc;

/// Orchestrates normalization, resolution, rendering and extraction.
///
/// Holds only read-only collaborators, so one instance can serve any number
/// of concurrent calls.
pub struct GenerationOrchestrator {
    resolver: Arc<dyn VariantResolver>,
    renderer: Arc<dyn TemplateRenderer>,
    theme: String,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(resolver: Arc<dyn VariantResolver>, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self {
            resolver,
            renderer,
            theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Use a different cosmetic theme for rendered templates
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Installed variant names
    pub fn variants(&self) -> Vec<String> {
        self.resolver.variants()
    }

    /// Normalize `raw` against `reference_year` and generate the license text
    pub fn generate(
        &self,
        raw: &RawLicenseParams,
        reference_year: i32,
    ) -> Result<LicenseText, GenerationError> {
        let request = normalizer::normalize(raw, reference_year);
        self.generate_request(&request)
    }

    /// Generate the license text for an already-normalized request
    pub fn generate_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<LicenseText, GenerationError> {
        // 1. Resolve the variant to an installed template
        let template = self.resolver.resolve(&request.variant)?;

        tracing::debug!(variant = %template.variant, "Resolved license template");

        // 2. Render themed markup
        let context = RenderContext::for_request(request, &self.theme);
        let markup = self
            .renderer
            .render(&template, &context)
            .map_err(|error| match error {
                GenerationError::TemplateUnavailable(variant) => {
                    GenerationError::unsupported(variant, self.resolver.variants())
                }
                other => other,
            })?;

        // 3. Extract the plain-text body
        extractor::extract(&markup)
    }
}
