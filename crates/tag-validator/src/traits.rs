//! Core validation traits

use crate::annotation::Params;
use crate::error::CheckResult;
use crate::value::{FieldSpec, FieldValue};

/// A rule that inspects one field's value and reports at most one violation
pub trait ValidationRule: Send + Sync {
    /// Validate a single field value against the annotation parameters.
    ///
    /// Return `Err(CheckError::Violation)` when the value breaks the rule and
    /// `Err(CheckError::Schema)` when the rule cannot be applied to the field
    /// at all (wrong value type, malformed parameter).
    fn validate(&self, field: &str, value: &FieldValue<'_>, params: &Params) -> CheckResult;

    /// Name used in diagnostics
    fn rule_name(&self) -> &str;
}

/// Record-shaped values: an ordered list of named, annotated fields.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record {
    /// Fields in declaration order
    fn fields(&self) -> Vec<FieldSpec<'_>>;

    /// Name used in logs
    fn record_name(&self) -> &str {
        "record"
    }

    /// Whether field types come from the data rather than the definition.
    ///
    /// When true, a value a rule cannot accept is reported as an
    /// `invalid_type` violation instead of a schema error.
    fn loosely_typed(&self) -> bool {
        false
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        (**self).fields()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }

    fn loosely_typed(&self) -> bool {
        (**self).loosely_typed()
    }
}
