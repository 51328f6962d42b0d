//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;

/// Partially-specified license parameters as supplied by a caller.
///
/// Every field is optional; several sources (config file, CLI flags,
/// interactive answers, server defaults) can be layered with [`merge`].
///
/// [`merge`]: RawLicenseParams::merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLicenseParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Shorthand for a single year, fills whichever bound is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl RawLicenseParams {
    /// Layer `overrides` on top of `self`: present override fields win.
    pub fn merge(self, overrides: RawLicenseParams) -> Self {
        Self {
            copyright: overrides.copyright.or(self.copyright),
            email: overrides.email.or(self.email),
            url: overrides.url.or(self.url),
            year: overrides.year.or(self.year),
            start_year: overrides.start_year.or(self.start_year),
            end_year: overrides.end_year.or(self.end_year),
            license: overrides.license.or(self.license),
        }
    }

    /// Whether a non-blank copyright holder is present
    pub fn has_copyright_holder(&self) -> bool {
        self.copyright
            .as_deref()
            .is_some_and(|holder| !holder.trim().is_empty())
    }
}

/// A fully-defaulted, typed generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub copyright_holder: String,
    pub email: Option<String>,
    pub url: Option<String>,
    pub start_year: i32,
    pub end_year: i32,
    /// Upper-cased variant identifier
    pub variant: String,
}

impl GenerationRequest {
    /// `start_year` alone when both bounds match, `start-end` otherwise.
    /// Reversed ranges are kept as given.
    pub fn year_expression(&self) -> String {
        if self.start_year == self.end_year {
            self.start_year.to_string()
        } else {
            format!("{}-{}", self.start_year, self.end_year)
        }
    }

    /// `{years} {holder}[, {url}][ <{email}>]`
    pub fn copyright_line(&self) -> String {
        let mut line = format!("{} {}", self.year_expression(), self.copyright_holder);
        if let Some(url) = &self.url {
            line.push_str(", ");
            line.push_str(url);
        }
        if let Some(email) = &self.email {
            line.push_str(" <");
            line.push_str(email);
            line.push('>');
        }
        line
    }
}

/// Final plain-text license body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseText(String);

impl LicenseText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LicenseText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LicenseText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
