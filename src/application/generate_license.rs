//! Use case for generating a license file

use std::sync::Arc;

use tracing::{error, info};

use crate::application::{
    ApplicationError, GenerateLicenseRequest, GenerateLicenseResponse, OutputService,
};
use crate::generation::{GenerationOrchestrator, normalize};

/// Use case for generating a license file and writing it out
pub struct GenerateLicenseUseCase {
    generation_orchestrator: Arc<GenerationOrchestrator>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateLicenseUseCase {
    pub fn new(
        generation_orchestrator: Arc<GenerationOrchestrator>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            generation_orchestrator,
            output_service,
        }
    }

    /// Generate and write the license. Nothing is written unless generation succeeds.
    pub async fn execute(
        &self,
        request: GenerateLicenseRequest,
        reference_year: i32,
    ) -> Result<GenerateLicenseResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Normalize and generate
        let normalized = normalize(&request.params, reference_year);
        let text = self
            .generation_orchestrator
            .generate_request(&normalized)
            .inspect_err(|e| error!(variant = %normalized.variant, error = %e, "License generation failed"))?;

        // 3. Write output
        self.output_service
            .write_license(&request.output, &text)
            .await?;

        info!(
            output = %request.output.display(),
            variant = %normalized.variant,
            bytes = text.len(),
            "Wrote license file"
        );

        Ok(GenerateLicenseResponse {
            output_path: request.output,
            variant: normalized.variant.clone(),
            copyright_line: normalized.copyright_line(),
            bytes_written: text.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationError, LicenseText, RawLicenseParams};
    use crate::infrastructure::{TeraTemplateRenderer, VariantRegistry};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct MockOutputService {
        written: Mutex<Vec<(PathBuf, String)>>,
    }

    #[async_trait]
    impl OutputService for MockOutputService {
        async fn write_license(
            &self,
            path: &Path,
            text: &LicenseText,
        ) -> Result<(), ApplicationError> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), text.to_string()));
            Ok(())
        }
    }

    fn use_case(output: Arc<MockOutputService>) -> GenerateLicenseUseCase {
        let orchestrator = GenerationOrchestrator::new(
            Arc::new(VariantRegistry::embedded()),
            Arc::new(TeraTemplateRenderer::new()),
        );
        GenerateLicenseUseCase::new(Arc::new(orchestrator), output)
    }

    fn params(license: &str) -> RawLicenseParams {
        RawLicenseParams {
            copyright: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            start_year: Some(2020),
            license: Some(license.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_execute_success() {
        let output = Arc::new(MockOutputService::default());

        let response = use_case(output.clone())
            .execute(GenerateLicenseRequest::new(params("isc"), "out/LICENSE"), 2025)
            .await
            .unwrap();

        assert_eq!(response.output_path, PathBuf::from("out/LICENSE"));
        assert_eq!(response.variant, "ISC");
        assert_eq!(
            response.copyright_line,
            "2020-2025 Jane Doe <jane@example.com>"
        );

        let written = output.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].1.starts_with("ISC License (ISC)"));
        assert!(written[0]
            .1
            .contains("Copyright (c) 2020-2025 Jane Doe <jane@example.com>"));
        assert_eq!(response.bytes_written, written[0].1.len());

        assert!(logs_contain("Wrote license file"));
    }

    #[tokio::test]
    async fn test_execute_unsupported_variant_writes_nothing() {
        let output = Arc::new(MockOutputService::default());

        let error = use_case(output.clone())
            .execute(GenerateLicenseRequest::new(params("GPL"), "LICENSE"), 2025)
            .await
            .unwrap_err();

        assert!(matches!(
            error.as_generation_error(),
            Some(GenerationError::UnsupportedVariant { variant, .. }) if variant == "GPL"
        ));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_missing_holder_writes_nothing() {
        let output = Arc::new(MockOutputService::default());
        let mut params = params("MIT");
        params.copyright = None;

        let error = use_case(output.clone())
            .execute(GenerateLicenseRequest::new(params, "LICENSE"), 2025)
            .await
            .unwrap_err();

        assert_eq!(
            error.as_generation_error(),
            Some(&GenerationError::MissingCopyrightHolder)
        );
        assert!(output.written.lock().unwrap().is_empty());
    }
}
