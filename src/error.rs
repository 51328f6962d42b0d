//! Error handling for configuration loading.
//!
//! Generation itself reports [`GenerationError`](crate::generation::GenerationError);
//! this type covers reading and parsing the YAML configuration and server
//! defaults files.
//!
//! # Examples
//!
//! ```
//! use auto_mit::config::LicenseConfig;
//! use auto_mit::error::Error;
//! use std::path::Path;
//!
//! let error = LicenseConfig::load(Path::new("/nonexistent/license.yml")).unwrap_err();
//! assert!(matches!(error, Error::Io { .. }));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid YAML for the expected shape
    #[error("Failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_names_path() {
        let error = Error::Io {
            path: PathBuf::from("license.yml"),
            source: io::Error::new(io::ErrorKind::NotFound, "File not found"),
        };
        assert_eq!(error.to_string(), "Failed to read license.yml: File not found");
    }

    #[test]
    fn test_yaml_error_names_path() {
        let source = serde_yaml::from_str::<Vec<String>>("a: b").unwrap_err();
        let error = Error::Yaml {
            path: PathBuf::from("license.yml"),
            source,
        };
        assert!(error.to_string().starts_with("Failed to parse license.yml"));
    }
}
