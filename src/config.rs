//! Declarative binding configuration.

use serde::{Deserialize, Serialize};

/// Name and fallback of one bound query parameter.
///
/// `default_value` may be omitted and then falls back to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub name: String,
    #[serde(default)]
    pub default_value: String,
}

impl BindingConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: String::new(),
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }
}
