//! Embedded template repository implementation

use rust_embed::RustEmbed;
use tracing::debug;

use super::{TemplateError, TemplateHandle, TemplateRepository, TemplateSource, variant_from_file_name};

/// License templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/licenses/"]
struct EmbeddedLicenseTemplates;

/// Template repository backed by embedded templates
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRepository for EmbeddedTemplateRepository {
    fn list_templates(&self) -> Vec<TemplateHandle> {
        let mut templates: Vec<TemplateHandle> = EmbeddedLicenseTemplates::iter()
            .filter_map(|path| embedded_handle(path.as_ref()))
            .collect();

        // Sort by variant for consistent ordering
        templates.sort_by(|a, b| a.variant.cmp(&b.variant));

        debug!(count = templates.len(), "Listed embedded license templates");

        templates
    }
}

/// Handle for an embedded resource, keeping its exact file name for loading
fn embedded_handle(resource: &str) -> Option<TemplateHandle> {
    variant_from_file_name(resource)
        .map(|variant| TemplateHandle::new(variant, TemplateSource::Embedded(resource.to_string())))
}

/// Read an embedded template resource by file name
pub(crate) fn read_embedded(name: &str) -> Result<String, TemplateError> {
    let file = EmbeddedLicenseTemplates::get(name).ok_or_else(|| TemplateError::not_found(name))?;

    String::from_utf8(file.data.into_owned()).map_err(|_| TemplateError::InvalidEncoding(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_templates() {
        let repo = EmbeddedTemplateRepository::new();
        let variants: Vec<String> = repo
            .list_templates()
            .into_iter()
            .map(|t| t.variant)
            .collect();

        assert_eq!(variants, vec!["ISC".to_string(), "MIT".to_string()]);
    }

    #[test]
    fn test_embedded_templates_contain_wrapper() {
        for template in EmbeddedTemplateRepository::new().list_templates() {
            let content = template.load().unwrap();
            assert_eq!(content.matches("<article>").count(), 1, "{}", template.variant);
            assert!(content.contains("{{ copyright_line }}"), "{}", template.variant);
        }
    }

    #[test]
    fn test_lowercase_resource_keeps_its_file_name() {
        let handle = embedded_handle("zlib.html.tera").unwrap();

        assert_eq!(handle.variant, "ZLIB");
        assert_eq!(handle.source, TemplateSource::Embedded("zlib.html.tera".to_string()));
        assert!(embedded_handle("README.md").is_none());
    }

    #[test]
    fn test_listed_templates_load_by_their_resource_name() {
        for template in EmbeddedTemplateRepository::new().list_templates() {
            let TemplateSource::Embedded(resource) = &template.source else {
                panic!("Expected embedded source for {}", template.variant);
            };
            assert!(read_embedded(resource).is_ok(), "{resource}");
        }
    }

    #[test]
    fn test_read_missing_embedded_template() {
        let error = read_embedded("GPL.html.tera").unwrap_err();
        assert!(matches!(error, TemplateError::TemplateNotFound(_)));
    }
}
