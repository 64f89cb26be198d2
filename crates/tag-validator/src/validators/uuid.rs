//! Identifier format validator (`uuid`)

use crate::annotation::Params;
use crate::error::{CheckResult, SchemaError, Violation};
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

// 8-4-4-4-12 hex groups, version nibble 4, variant nibble 8, 9, a or b
static UUID_V4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("UUID pattern is valid")
});

/// Checks that a string is a canonical version 4 UUID. Takes no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidValidator;

impl UuidValidator {
    pub const NAME: &'static str = "uuid";

    pub fn new() -> Self {
        Self
    }

    pub fn is_valid(id: &str) -> bool {
        UUID_V4.is_match(id)
    }
}

impl ValidationRule for UuidValidator {
    fn validate(&self, field: &str, value: &FieldValue<'_>, _params: &Params) -> CheckResult {
        let id = value.as_str().ok_or_else(|| {
            SchemaError::type_mismatch(field, Self::NAME, "a string", value.kind())
        })?;

        if !Self::is_valid(id) {
            return Err(Violation::with_code(
                field,
                "invalid identifier format",
                "invalid_identifier_format",
            )
            .into());
        }

        Ok(())
    }

    fn rule_name(&self) -> &str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::error::CheckError;

    fn run(value: &str) -> CheckResult {
        let annotation = Annotation::parse("uuid");
        UuidValidator.validate("id", &FieldValue::Str(value), annotation.params())
    }

    #[test]
    fn test_valid_v4() {
        assert!(run("ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae").is_ok());
        assert!(run("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(run("BA6516AA-3CB8-4592-B3CF-BA3AD9E176AE").is_ok());
    }

    #[test]
    fn test_generated_ids_are_valid() {
        for _ in 0..32 {
            let id = ::uuid::Uuid::new_v4().to_string();
            assert!(run(&id).is_ok(), "{} should be valid", id);
        }
    }

    #[test]
    fn test_invalid_formats() {
        let invalid = [
            "id",
            "ba3ad9e176ae",
            "",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8", // version 1
            "ba6516aa-3cb8-4592-c3cf-ba3ad9e176ae", // variant c
            "ba6516aa-3cb8-4592-|3cf-ba3ad9e176ae",
            "ba6516aa3cb84592b3cfba3ad9e176ae",
            "{ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae}",
            "ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae ",
            "ga6516aa-3cb8-4592-b3cf-ba3ad9e176ae",
        ];

        for id in invalid {
            match run(id) {
                Err(CheckError::Violation(v)) => {
                    assert_eq!(v.code, "invalid_identifier_format", "{}", id);
                    assert_eq!(v.message, "invalid identifier format");
                }
                other => panic!("{:?} should be rejected, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_parameters_are_ignored() {
        let annotation = Annotation::parse("uuid,min=100,required");
        let result = UuidValidator.validate(
            "id",
            &FieldValue::Str("ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae"),
            annotation.params(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_string_is_schema_error() {
        let annotation = Annotation::parse("uuid");
        let result = UuidValidator.validate("id", &FieldValue::Int(7), annotation.params());
        assert!(matches!(result, Err(CheckError::Schema(_))));
    }
}
