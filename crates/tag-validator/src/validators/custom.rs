//! Caller-supplied validation functions

use crate::annotation::{Param, Params};
use crate::error::{CheckResult, SchemaError, Violation};
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use std::sync::Arc;

/// Custom validation function: the field value and the raw annotation
/// parameters in, an optional failure message out
pub type CustomValidationFn = Arc<dyn Fn(&FieldValue<'_>, &[Param]) -> Option<String> + Send + Sync>;

/// A rule registered under a caller-chosen tag.
///
/// Registering it under the name of a built-in replaces the built-in.
#[derive(Clone)]
pub struct CustomValidator {
    /// Annotation name this validator answers to
    pub tag: String,
    validator: CustomValidationFn,
    /// Violation code reported on failure
    pub code: String,
}

impl CustomValidator {
    /// Create a new custom validator
    pub fn new<F>(tag: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&FieldValue<'_>, &[Param]) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            tag: tag.into(),
            validator: Arc::new(validator),
            code: "custom".to_string(),
        }
    }

    /// Set the violation code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl std::fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomValidator")
            .field("tag", &self.tag)
            .field("code", &self.code)
            .finish()
    }
}

impl ValidationRule for CustomValidator {
    fn validate(&self, field: &str, value: &FieldValue<'_>, params: &Params) -> CheckResult {
        match (self.validator)(value, params.raw()) {
            Some(message) => Err(Violation::with_code(field, message, self.code.clone()).into()),
            None => Ok(()),
        }
    }

    fn rule_name(&self) -> &str {
        &self.tag
    }
}

/// Helpers for common string checks
impl CustomValidator {
    /// Value must be one of the allowed strings
    pub fn one_of(tag: impl Into<String>, allowed: Vec<String>) -> impl ValidationRule {
        StringRule::new(tag, "not_in_list", move |text: &str| {
            if allowed.iter().any(|a| a == text) {
                None
            } else {
                Some(format!("must be one of: {}", allowed.join(", ")))
            }
        })
    }

    /// Value must not be one of the forbidden strings
    pub fn not_one_of(tag: impl Into<String>, forbidden: Vec<String>) -> impl ValidationRule {
        StringRule::new(tag, "in_forbidden_list", move |text: &str| {
            if forbidden.iter().any(|f| f == text) {
                Some(format!("cannot be one of: {}", forbidden.join(", ")))
            } else {
                None
            }
        })
    }

    /// Value must contain a substring
    pub fn contains(tag: impl Into<String>, substring: impl Into<String>) -> impl ValidationRule {
        let substring = substring.into();
        StringRule::new(tag, "missing_substring", move |text: &str| {
            if text.contains(substring.as_str()) {
                None
            } else {
                Some(format!("must contain '{}'", substring))
            }
        })
    }
}

/// String-only helper rule; non-string values are a schema error like the
/// built-ins
struct StringRule<F> {
    tag: String,
    code: &'static str,
    check: F,
}

impl<F> StringRule<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn new(tag: impl Into<String>, code: &'static str, check: F) -> Self {
        Self {
            tag: tag.into(),
            code,
            check,
        }
    }
}

impl<F> ValidationRule for StringRule<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn validate(&self, field: &str, value: &FieldValue<'_>, _params: &Params) -> CheckResult {
        let text = value.as_str().ok_or_else(|| {
            SchemaError::type_mismatch(field, self.tag.as_str(), "a string", value.kind())
        })?;

        match (self.check)(text) {
            Some(message) => Err(Violation::with_code(field, message, self.code).into()),
            None => Ok(()),
        }
    }

    fn rule_name(&self) -> &str {
        &self.tag
    }
}
