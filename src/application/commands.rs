//! Data Transfer Objects for application layer

use std::path::PathBuf;

use crate::generation::{GenerationError, RawLicenseParams};

/// Default destination of the generated file
pub const DEFAULT_OUTPUT: &str = "LICENSE";

/// Request to generate a license file
#[derive(Debug, Clone)]
pub struct GenerateLicenseRequest {
    pub params: RawLicenseParams,
    pub output: PathBuf,
}

impl GenerateLicenseRequest {
    pub fn new(params: RawLicenseParams, output: impl Into<PathBuf>) -> Self {
        Self {
            params,
            output: output.into(),
        }
    }

    /// A copyright holder is mandatory at this boundary
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !self.params.has_copyright_holder() {
            return Err(GenerationError::MissingCopyrightHolder);
        }
        Ok(())
    }
}

/// Response from license generation
#[derive(Debug, Clone)]
pub struct GenerateLicenseResponse {
    pub output_path: PathBuf,
    pub variant: String,
    pub copyright_line: String,
    pub bytes_written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_license_request_validation() {
        let valid = GenerateLicenseRequest::new(
            RawLicenseParams {
                copyright: Some("Jane Doe".to_string()),
                ..Default::default()
            },
            DEFAULT_OUTPUT,
        );
        assert!(valid.validate().is_ok());

        // Missing holder
        let mut invalid = valid.clone();
        invalid.params.copyright = None;
        assert_eq!(
            invalid.validate().unwrap_err(),
            GenerationError::MissingCopyrightHolder
        );

        // Blank holder
        let mut invalid = valid.clone();
        invalid.params.copyright = Some("  ".to_string());
        assert!(invalid.validate().is_err());
    }
}
