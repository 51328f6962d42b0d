//! Filesystem-based template loader
//!
//! Loads license templates from a directory on the filesystem, typically
//! specified via the --template-dir CLI flag. Every `<NAME>.html.tera` file
//! in the directory becomes variant `NAME`.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use crate::infrastructure::templates::{
    TemplateError, TemplateHandle, TemplateLoader, TemplateSource, variant_from_file_name,
};

/// Template loader that scans a directory for license templates
pub struct FileSystemTemplateLoader;

impl FileSystemTemplateLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemTemplateLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateLoader for FileSystemTemplateLoader {
    async fn load_templates(&self, path: &Path) -> Result<Vec<TemplateHandle>, TemplateError> {
        // Verify the directory exists
        if !fs::try_exists(path).await? {
            return Err(TemplateError::not_found(path.to_string_lossy()));
        }

        let mut templates = Vec::new();
        let mut entries = fs::read_dir(path).await?;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
                continue;
            };

            let Some(variant) = variant_from_file_name(file_name) else {
                continue;
            };

            if !entry.file_type().await?.is_file() {
                continue;
            }

            debug!(variant = %variant, path = %entry.path().display(), "Found license template");
            templates.push(TemplateHandle::new(
                variant,
                TemplateSource::FileSystem(entry.path()),
            ));
        }

        templates.sort_by(|a, b| a.variant.cmp(&b.variant));

        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_templates(dir: &Path) {
        fs::write(
            dir.join("apache.html.tera"),
            "<article>Apache {{ copyright_line }}</article>",
        )
        .await
        .unwrap();
        fs::write(dir.join("BSD.html.tera"), "<article>{{ copyright_line }}</article>")
            .await
            .unwrap();
        fs::write(dir.join("notes.txt"), "not a template").await.unwrap();
        fs::create_dir(dir.join("NESTED.html.tera")).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_templates_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        create_test_templates(temp_dir.path()).await;

        let loader = FileSystemTemplateLoader::new();
        let templates = loader.load_templates(temp_dir.path()).await.unwrap();

        let variants: Vec<&str> = templates.iter().map(|t| t.variant.as_str()).collect();
        assert_eq!(variants, vec!["APACHE", "BSD"]);

        assert_eq!(
            templates[0].source,
            TemplateSource::FileSystem(temp_dir.path().join("apache.html.tera"))
        );
        assert_eq!(
            templates[0].load().unwrap(),
            "<article>Apache {{ copyright_line }}</article>"
        );
    }

    #[tokio::test]
    async fn test_load_templates_missing_directory() {
        let loader = FileSystemTemplateLoader::new();

        let result = loader.load_templates(Path::new("/nonexistent/licenses")).await;

        match result.unwrap_err() {
            TemplateError::TemplateNotFound(path) => assert!(path.contains("nonexistent")),
            other => panic!("Expected TemplateNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_templates_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let templates = FileSystemTemplateLoader::new()
            .load_templates(temp_dir.path())
            .await
            .unwrap();

        assert!(templates.is_empty());
    }
}
