//! Variant registry - maps license variant names to installed templates

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::generation::{GenerationError, VariantResolver};
use crate::infrastructure::templates::{
    EmbeddedTemplateRepository, FileSystemTemplateLoader, TemplateError, TemplateHandle,
    TemplateLoader, TemplateRepository,
};

/// Registry of installed license templates, keyed by upper-cased variant name.
///
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    templates: BTreeMap<String, TemplateHandle>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the templates compiled into the binary
    pub fn embedded() -> Self {
        let mut registry = Self::new();
        for template in EmbeddedTemplateRepository::new().list_templates() {
            registry.register(template);
        }
        registry
    }

    /// Embedded templates plus every template found in `dir`.
    ///
    /// Templates from `dir` replace embedded templates of the same variant.
    pub async fn with_template_dir(dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut registry = Self::embedded();

        if let Some(dir) = dir {
            let templates = FileSystemTemplateLoader::new().load_templates(dir).await?;
            info!(
                dir = %dir.display(),
                count = templates.len(),
                "Loaded license templates from directory"
            );
            for template in templates {
                registry.register(template);
            }
        }

        Ok(registry)
    }

    /// Register a template, replacing any previous one for the same variant
    pub fn register(&mut self, template: TemplateHandle) -> Option<TemplateHandle> {
        self.templates.insert(template.variant.clone(), template)
    }

    pub fn get(&self, variant: &str) -> Option<&TemplateHandle> {
        self.templates.get(&variant.to_uppercase())
    }

    /// Installed templates, ordered by variant
    pub fn templates(&self) -> impl Iterator<Item = &TemplateHandle> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl VariantResolver for VariantRegistry {
    fn resolve(&self, variant: &str) -> Result<TemplateHandle, GenerationError> {
        self.get(variant)
            .cloned()
            .ok_or_else(|| GenerationError::unsupported(variant.to_uppercase(), self.variants()))
    }

    fn variants(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}
