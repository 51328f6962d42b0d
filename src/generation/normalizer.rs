//! Normalization rules turning raw parameters into a generation request

use crate::generation::{GenerationError, GenerationRequest, RawLicenseParams};

/// Holder used when no source supplied one
pub const DEFAULT_COPYRIGHT_HOLDER: &str = "Copyright Holder";

/// Variant used when none was requested
pub const DEFAULT_VARIANT: &str = "MIT";

/// Normalize raw parameters into a fully-defaulted request.
///
/// Never fails. `reference_year` is the year used for absent bounds; callers
/// read the clock once per invocation and pass it in.
pub fn normalize(raw: &RawLicenseParams, reference_year: i32) -> GenerationRequest {
    let copyright_holder = non_blank(raw.copyright.as_deref())
        .unwrap_or(DEFAULT_COPYRIGHT_HOLDER)
        .to_string();

    // Explicit bounds first, then the single-year shorthand, then the reference year.
    let start_year = raw.start_year.or(raw.year).unwrap_or(reference_year);
    let end_year = raw.end_year.or(raw.year).unwrap_or(reference_year);

    let variant = normalize_variant(raw.license.as_deref());

    tracing::debug!(
        holder = %copyright_holder,
        start_year,
        end_year,
        variant = %variant,
        "Normalized license parameters"
    );

    GenerationRequest {
        copyright_holder,
        email: non_blank(raw.email.as_deref()).map(str::to_string),
        url: non_blank(raw.url.as_deref()).map(str::to_string),
        start_year,
        end_year,
        variant,
    }
}

/// Canonical (upper-cased) variant name, `MIT` when absent or blank
pub fn normalize_variant(variant: Option<&str>) -> String {
    non_blank(variant)
        .unwrap_or(DEFAULT_VARIANT)
        .to_uppercase()
}

/// Parse a caller-supplied year token
pub fn parse_year(token: &str) -> Result<i32, GenerationError> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| GenerationError::InvalidYear(token.to_string()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
