//! YAML configuration for license generation.
//!
//! The same shape serves as the CLI `--config` file and the server
//! `--defaults` file. JSON documents are accepted since they are valid YAML.
//!
//! ```yaml
//! copyright: Jane Doe
//! email: jane@example.com
//! start_year: 2020
//! license: ISC
//! theme: default
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::generation::RawLicenseParams;

/// License configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseConfig {
    #[serde(flatten)]
    pub params: RawLicenseParams,
    /// Cosmetic theme passed to the templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl LicenseConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded license configuration");

        Ok(config)
    }

    /// Parse configuration from a YAML (or JSON) string
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document is an empty configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("license.yml");
        std::fs::write(
            &path,
            "copyright: Jane Doe\nurl: https://jane.dev\nyear: 2023\nlicense: isc\ntheme: dark\n",
        )
        .unwrap();

        let config = LicenseConfig::load(&path).unwrap();

        assert_eq!(config.params.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(config.params.url.as_deref(), Some("https://jane.dev"));
        assert_eq!(config.params.year, Some(2023));
        assert_eq!(config.params.license.as_deref(), Some("isc"));
        assert_eq!(config.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_json_is_accepted() {
        let config =
            LicenseConfig::from_yaml(r#"{"copyright": "Jane Doe", "end_year": 2030}"#).unwrap();

        assert_eq!(config.params.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(config.params.end_year, Some(2030));
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LicenseConfig::from_yaml("\n").unwrap(), LicenseConfig::default());
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        assert!(LicenseConfig::from_yaml("start_year: soon\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let error = LicenseConfig::load(Path::new("/nonexistent/license.yml")).unwrap_err();

        assert!(matches!(error, Error::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/license.yml"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("license.yml");
        std::fs::write(&path, "copyright: [unclosed\n").unwrap();

        let error = LicenseConfig::load(&path).unwrap_err();

        assert!(matches!(error, Error::Yaml { .. }));
    }
}
