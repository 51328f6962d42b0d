//! Core template types for the infrastructure layer
//!
//! A [`TemplateHandle`] names a license variant and where its template lives.
//! Content is read when the template is rendered, not when it is resolved.

use std::fmt;
use std::path::PathBuf;

use super::{TemplateError, embedded_repository};

/// File suffix identifying a license template resource
pub const TEMPLATE_SUFFIX: &str = ".html.tera";

/// Where a template was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary under the given resource name
    Embedded(String),
    /// A file on disk
    FileSystem(PathBuf),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Embedded(_) => write!(f, "embedded"),
            TemplateSource::FileSystem(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Handle to an installed license template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHandle {
    /// Upper-cased variant name
    pub variant: String,
    pub source: TemplateSource,
}

impl TemplateHandle {
    pub fn new(variant: impl Into<String>, source: TemplateSource) -> Self {
        Self {
            variant: variant.into().to_uppercase(),
            source,
        }
    }

    /// Read the template source
    pub fn load(&self) -> Result<String, TemplateError> {
        match &self.source {
            TemplateSource::Embedded(name) => embedded_repository::read_embedded(name),
            TemplateSource::FileSystem(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

/// Variant name for a template file name, e.g. `isc.html.tera` -> `ISC`
pub fn variant_from_file_name(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .filter(|stem| !stem.is_empty())
        .map(str::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_file_name() {
        assert_eq!(variant_from_file_name("MIT.html.tera").as_deref(), Some("MIT"));
        assert_eq!(variant_from_file_name("isc.html.tera").as_deref(), Some("ISC"));
        assert_eq!(variant_from_file_name(".html.tera"), None);
        assert_eq!(variant_from_file_name("MIT.html"), None);
        assert_eq!(variant_from_file_name("README.md"), None);
    }

    #[test]
    fn test_handle_uppercases_variant() {
        let handle = TemplateHandle::new("mit", TemplateSource::Embedded("mit.html.tera".into()));
        assert_eq!(handle.variant, "MIT");
        assert_eq!(handle.source, TemplateSource::Embedded("mit.html.tera".into()));
    }

    #[test]
    fn test_embedded_load_uses_resource_name_not_variant() {
        let handle = TemplateHandle::new("anything", TemplateSource::Embedded("MIT.html.tera".into()));

        assert!(handle.load().unwrap().contains("<article>"));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let handle = TemplateHandle::new(
            "GONE",
            TemplateSource::FileSystem(PathBuf::from("/nonexistent/GONE.html.tera")),
        );

        assert!(handle.load().unwrap_err().is_not_found());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            TemplateSource::Embedded("MIT.html.tera".into()).to_string(),
            "embedded"
        );
        assert_eq!(
            TemplateSource::FileSystem(PathBuf::from("/tmp/MIT.html.tera")).to_string(),
            "/tmp/MIT.html.tera"
        );
    }
}
