//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::{ApplicationError, OutputService};
use crate::generation::LicenseText;

/// Output service that writes license files to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_license(&self, path: &Path, text: &LicenseText) -> Result<(), ApplicationError> {
        // Create parent directory if needed
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = fs::File::create(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create file {}: {}",
                path.display(),
                e
            ))
        })?;

        file.write_all(text.as_str().as_bytes()).await.map_err(|e| {
            ApplicationError::OutputError(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.flush().await.map_err(|e| {
            ApplicationError::OutputError(format!("Failed to flush file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
