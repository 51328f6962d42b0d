//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::generation::LicenseText;

/// Service for writing generated license text to its destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write the license text to `path`, replacing any existing file
    async fn write_license(&self, path: &Path, text: &LicenseText) -> Result<(), ApplicationError>;
}

/// Source of interactive answers
///
/// Each method receives the value already known (if any) as its default.
pub trait Prompter {
    /// Ask for a required, non-empty value
    fn required(&mut self, prompt: &str, default: Option<&str>) -> Result<String, ApplicationError>;

    /// Ask for an optional value; an empty answer means absent
    fn optional(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>, ApplicationError>;

    /// Pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize, ApplicationError>;
}
