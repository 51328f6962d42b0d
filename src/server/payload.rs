//! Request body accepted by the generation endpoint

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error_body;
use crate::generation::{GenerationError, RawLicenseParams, parse_year};

/// Year as sent by a client: any JSON value, or a form string
///
/// Only integers and integer strings are years; anything else is reported as
/// [`GenerationError::InvalidYear`] instead of failing body deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct YearField(pub JsonValue);

impl YearField {
    fn parse(&self) -> Result<Option<i32>, GenerationError> {
        match &self.0 {
            JsonValue::Null => Ok(None),
            JsonValue::String(text) if text.trim().is_empty() => Ok(None),
            JsonValue::String(text) => parse_year(text).map(Some),
            JsonValue::Number(number) => number
                .as_i64()
                .and_then(|year| i32::try_from(year).ok())
                .map(Some)
                .ok_or_else(|| GenerationError::InvalidYear(number.to_string())),
            other => Err(GenerationError::InvalidYear(other.to_string())),
        }
    }
}

/// Body of `POST /`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseRequestBody {
    #[serde(default, alias = "name")]
    pub copyright: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub year: Option<YearField>,
    #[serde(default, alias = "startYear")]
    pub start_year: Option<YearField>,
    #[serde(default, alias = "endYear")]
    pub end_year: Option<YearField>,
    #[serde(default)]
    pub license: Option<String>,
}

impl LicenseRequestBody {
    /// Convert into raw parameters, parsing year fields
    pub fn into_params(self) -> Result<RawLicenseParams, GenerationError> {
        Ok(RawLicenseParams {
            copyright: non_empty(self.copyright),
            email: non_empty(self.email),
            url: non_empty(self.url),
            year: parse_optional(self.year.as_ref())?,
            start_year: parse_optional(self.start_year.as_ref())?,
            end_year: parse_optional(self.end_year.as_ref())?,
            license: non_empty(self.license),
        })
    }
}

// Form submissions send empty strings for untouched fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_optional(field: Option<&YearField>) -> Result<Option<i32>, GenerationError> {
    match field {
        Some(field) => field.parse(),
        None => Ok(None),
    }
}

/// Extracts a [`LicenseRequestBody`] from either a JSON or a urlencoded form body
pub struct LicensePayload(pub LicenseRequestBody);

#[axum::async_trait]
impl<S> FromRequest<S> for LicensePayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<LicenseRequestBody>::from_request(req, state)
                .await
                .map_err(|rejection| reject(rejection.body_text()))?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<LicenseRequestBody>::from_request(req, state)
                .await
                .map_err(|rejection| reject(rejection.body_text()))?;
            Ok(Self(body))
        }
    }
}

// Unreadable bodies are client errors with the same shape as generation errors.
fn reject(message: String) -> Response {
    tracing::warn!(error = %message, "Rejected license request body");
    error_body(StatusCode::BAD_REQUEST, message)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_body_with_numbers_and_aliases() {
        let body: LicenseRequestBody = serde_json::from_str(
            r#"{"name": "Jane Doe", "startYear": 2020, "endYear": "2024", "license": "mit"}"#,
        )
        .unwrap();

        let params = body.into_params().unwrap();

        assert_eq!(params.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(params.start_year, Some(2020));
        assert_eq!(params.end_year, Some(2024));
        assert_eq!(params.license.as_deref(), Some("mit"));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let body = LicenseRequestBody {
            copyright: Some("Jane".to_string()),
            email: Some(String::new()),
            year: Some(YearField(json!(""))),
            ..Default::default()
        };

        let params = body.into_params().unwrap();

        assert_eq!(params.email, None);
        assert_eq!(params.year, None);
    }

    #[test]
    fn test_non_numeric_year_is_invalid() {
        let body = LicenseRequestBody {
            start_year: Some(YearField(json!("MMXX"))),
            ..Default::default()
        };

        assert_eq!(
            body.into_params().unwrap_err(),
            GenerationError::InvalidYear("MMXX".to_string())
        );
    }

    #[test]
    fn test_non_integer_numbers_are_invalid_years() {
        for (value, token) in [
            (json!(2024.5), "2024.5"),
            (json!(99_999_999_999_i64), "99999999999"),
            (json!(-1.0), "-1.0"),
        ] {
            assert_eq!(
                YearField(value).parse().unwrap_err(),
                GenerationError::InvalidYear(token.to_string())
            );
        }
    }

    #[test]
    fn test_non_scalar_year_is_invalid() {
        let body: LicenseRequestBody =
            serde_json::from_str(r#"{"copyright": "Jane", "year": true}"#).unwrap();

        assert_eq!(
            body.into_params().unwrap_err(),
            GenerationError::InvalidYear("true".to_string())
        );
    }

    #[test]
    fn test_null_year_is_absent() {
        assert_eq!(YearField(JsonValue::Null).parse().unwrap(), None);
    }
}
