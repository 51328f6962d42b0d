//! Tera-based license template renderer

use tera::{Context, Tera};
use tracing::{debug, error};

use crate::generation::{GenerationError, RenderContext, TemplateRenderer};
use crate::infrastructure::templates::TemplateHandle;

/// Tera-based template renderer
///
/// A fresh `Tera` instance is built per call; templates are small and the
/// renderer keeps no state between calls.
pub struct TeraTemplateRenderer;

impl TeraTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(
        &self,
        template: &TemplateHandle,
        context: &RenderContext,
    ) -> Result<String, GenerationError> {
        let source = template.load().map_err(|e| {
            if !e.is_not_found() {
                error!(
                    variant = %template.variant,
                    source = %template.source,
                    error = %e,
                    "Failed to read license template"
                );
            }
            GenerationError::TemplateUnavailable(template.variant.clone())
        })?;

        // Tera only autoescapes templates whose name ends in .html
        let template_name = format!("{}.html", template.variant);

        let mut tera = Tera::default();
        tera.add_raw_template(&template_name, &source).map_err(|e| {
            GenerationError::malformed(format!(
                "failed to parse template for {}: {}",
                template.variant,
                error_chain(&e)
            ))
        })?;

        let rendered = tera
            .render(&template_name, &to_tera_context(context))
            .map_err(|e| {
                GenerationError::RenderError(format!(
                    "failed to render template for {}: {}",
                    template.variant,
                    error_chain(&e)
                ))
            })?;

        debug!(
            variant = %template.variant,
            source = %template.source,
            bytes = rendered.len(),
            "Rendered license template"
        );

        Ok(rendered)
    }
}

fn to_tera_context(context: &RenderContext) -> Context {
    let mut tera_context = Context::new();
    for (key, value) in &context.variables {
        tera_context.insert(key, value);
    }
    tera_context
}

/// Tera nests the useful detail in the error source chain
fn error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
