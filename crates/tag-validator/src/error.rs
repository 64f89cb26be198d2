//! Validation error types and handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Outcome of a single rule invocation
pub type CheckResult = Result<(), CheckError>;

/// A single field's validation failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    /// The field that failed validation
    pub field: String,
    /// Human-readable reason
    pub message: String,
    /// Stable category for programmatic handling
    pub code: String,
    /// Additional context or hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl Violation {
    /// Create a new violation with the generic `validation_failed` code
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_code(field, message, "validation_failed")
    }

    /// Create a violation with a specific code
    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
            context: None,
        }
    }

    /// Attach additional context
    pub fn context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for Violation {}

/// Ordered collection of violations produced by one validation pass.
///
/// Violations keep the declaration order of the fields they belong to and a
/// field appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
pub struct ValidationErrors {
    errors: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append a violation
    pub fn add(&mut self, violation: Violation) {
        self.errors.push(violation);
    }

    /// Add a simple violation with field and message
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(Violation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violations, which is also the number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.errors.iter()
    }

    /// The individual causes, in field declaration order
    pub fn causes(&self) -> &[Violation] {
        &self.errors
    }

    /// Unwrap the aggregate into its individual causes
    pub fn into_causes(self) -> Vec<Violation> {
        self.errors
    }

    /// Get the violation recorded for a field
    pub fn get_field_error(&self, field: &str) -> Option<&Violation> {
        self.errors.iter().find(|v| v.field == field)
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.get_field_error(field).is_some()
    }

    /// Names of the failing fields, in order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|v| v.field.as_str()).collect()
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.errors
            }
        })
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for error in &self.errors {
                write!(f, "\n  {}", error)?;
            }
            Ok(())
        }
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self {
            errors: vec![violation],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Usage errors: the schema itself is wrong, not the data.
///
/// These are never collected as violations, except type mismatches on a
/// loosely typed record. [`crate::Validator::validate`] panics with them;
/// [`crate::Validator::check`] hands them back.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("input should be a record, found {found}")]
    NotARecord { found: String },

    #[error("field '{field}' is annotated with '{rule}' which expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        rule: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{field}' has invalid parameter '{key}={value}'")]
    InvalidParameter {
        field: String,
        key: String,
        value: String,
    },

    #[error("field '{field}' has invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SchemaError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        field: impl Into<String>,
        rule: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            rule: rule.into(),
            expected,
            found,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Failure reported by a rule
#[derive(Debug, Error)]
pub enum CheckError {
    /// The value broke the constraint; collected and reported to the caller
    #[error(transparent)]
    Violation(#[from] Violation),

    /// The annotation does not fit the field; aborts the validation pass
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
