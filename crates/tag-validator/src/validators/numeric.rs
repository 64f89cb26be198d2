//! Integer range validator (`number`)

use crate::annotation::{Bounds, Params};
use crate::error::{CheckResult, SchemaError, Violation};
use crate::traits::ValidationRule;
use crate::value::FieldValue;

/// Checks an integer against `min`/`max`.
///
/// The minimum is checked first, so a value failing both bounds is reported
/// once, as below the minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator;

impl NumberValidator {
    pub const NAME: &'static str = "number";

    pub fn new() -> Self {
        Self
    }

    /// Range check shared with anything that has an integer and bounds
    pub fn check_range(field: &str, value: i128, bounds: Bounds) -> Result<(), Violation> {
        if value < i128::from(bounds.min) {
            return Err(Violation::with_code(
                field,
                format!("is below minimum {}", bounds.min),
                "below_minimum",
            ));
        }

        if let Some(max) = bounds.active_max() {
            if value > i128::from(max) {
                return Err(Violation::with_code(
                    field,
                    format!("is above maximum {}", max),
                    "above_maximum",
                ));
            }
        }

        Ok(())
    }
}

impl ValidationRule for NumberValidator {
    fn validate(&self, field: &str, value: &FieldValue<'_>, params: &Params) -> CheckResult {
        let num = value.as_integer().ok_or_else(|| {
            SchemaError::type_mismatch(field, Self::NAME, "an integer", value.kind())
        })?;

        let bounds = params.bounds(field)?;
        Self::check_range(field, num, bounds)?;
        Ok(())
    }

    fn rule_name(&self) -> &str {
        Self::NAME
    }
}
