//! String validator (`string`): required, length bounds and pattern

use crate::annotation::Params;
use crate::error::{CheckResult, SchemaError, Violation};
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use regex::Regex;

/// Checks a string in the order required, minimum length, maximum length,
/// pattern. Only the first failing check is reported.
///
/// Lengths count Unicode scalar values. Patterns are wrapped in ASCII `\b`
/// word boundaries unless that is turned off, and must match somewhere in
/// the value. Non-ASCII letters are not word characters for the boundary.
#[derive(Debug, Clone, Copy)]
pub struct StringValidator {
    word_boundaries: bool,
}

impl StringValidator {
    pub const NAME: &'static str = "string";

    pub fn new() -> Self {
        Self {
            word_boundaries: true,
        }
    }

    /// Set whether patterns are anchored at word boundaries
    pub fn word_boundaries(mut self, word_boundaries: bool) -> Self {
        self.word_boundaries = word_boundaries;
        self
    }

    fn compile(&self, field: &str, pattern: &str) -> Result<Regex, SchemaError> {
        let source = if self.word_boundaries {
            format!(r"(?-u:\b)(?:{})(?-u:\b)", pattern)
        } else {
            pattern.to_string()
        };

        Regex::new(&source).map_err(|source| SchemaError::InvalidPattern {
            field: field.to_string(),
            pattern: pattern.to_string(),
            source,
        })
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for StringValidator {
    fn validate(&self, field: &str, value: &FieldValue<'_>, params: &Params) -> CheckResult {
        let text = value.as_str().ok_or_else(|| {
            SchemaError::type_mismatch(field, Self::NAME, "a string", value.kind())
        })?;

        let bounds = params.bounds(field)?;
        let pattern = match params.pattern() {
            Some(pattern) => Some(self.compile(field, pattern)?),
            None => None,
        };

        let length = text.chars().count() as i64;

        if length == 0 && params.flag("required") {
            return Err(Violation::with_code(field, "must not be empty", "empty").into());
        }

        if length < bounds.min {
            return Err(Violation::with_code(
                field,
                format!("is below minimum length {}", bounds.min),
                "below_minimum",
            )
            .into());
        }

        if let Some(max) = bounds.active_max() {
            if length > max {
                return Err(Violation::with_code(
                    field,
                    format!("is above maximum length {}", max),
                    "above_maximum",
                )
                .into());
            }
        }

        if let Some(regex) = pattern {
            if !regex.is_match(text) {
                return Err(
                    Violation::with_code(field, "pattern does not match", "pattern_mismatch")
                        .context(serde_json::json!({ "pattern": params.pattern() }))
                        .into(),
                );
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &str {
        Self::NAME
    }
}
