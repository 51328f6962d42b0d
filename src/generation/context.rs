//! Render context handed to license templates

use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::generation::GenerationRequest;

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "default";

/// Variables exposed to a license template
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, JsonValue>,
}

impl RenderContext {
    /// Create an empty render context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the context for a normalized request.
    ///
    /// `gravatar` is reserved for an identity image and always empty.
    pub fn for_request(request: &GenerationRequest, theme: &str) -> Self {
        let mut context = Self::new();
        context.add_variable("copyright_line", JsonValue::from(request.copyright_line()));
        context.add_variable("theme", JsonValue::from(theme));
        context.add_variable("gravatar", JsonValue::from(""));
        context
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Check if a variable exists
    pub fn has_variable(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.variables.get(key)
    }
}
