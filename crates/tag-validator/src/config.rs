//! Validator configuration

use serde::{Deserialize, Serialize};
use service_builder::builder;

/// Annotation value that disables validation of a field
pub const DEFAULT_SKIP_TOKEN: &str = "-";

/// Configuration for a [`crate::Validator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder]
pub struct ValidatorConfig {
    /// Annotation that means "do not validate this field"
    #[builder(default = "DEFAULT_SKIP_TOKEN.to_string()", getter)]
    pub skip_token: String,

    /// Wrap `string` patterns in `\b` word boundaries
    #[builder(default = "true", getter)]
    pub word_boundaries: bool,

    /// Emit trace events for fields that are skipped
    #[builder(default = "true", getter)]
    pub log_skipped: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            skip_token: DEFAULT_SKIP_TOKEN.to_string(),
            word_boundaries: true,
            log_skipped: true,
        }
    }
}

impl ValidatorConfigBuilder {
    /// Configuration with logging of skipped fields turned off
    pub fn quiet() -> Self {
        ValidatorConfig::builder().log_skipped(false)
    }
}
