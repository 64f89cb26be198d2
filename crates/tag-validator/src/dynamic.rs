//! Records described at runtime: a [`Schema`] alongside a JSON value

use crate::annotation::Annotation;
use crate::error::{SchemaError, ValidationResult};
use crate::traits::Record;
use crate::validator::{fatal, Validator};
use crate::validators::{NumberValidator, StringValidator, UuidValidator};
use crate::value::{FieldSpec, FieldValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered field names and their annotations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    fields: Vec<SchemaField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub annotation: String,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field; declaration order is validation order
    pub fn field(mut self, name: impl Into<String>, annotation: impl Into<String>) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            annotation: annotation.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }
}

/// A JSON object paired with the schema that describes it
#[derive(Debug, Clone, Copy)]
pub struct JsonRecord<'a> {
    schema: &'a Schema,
    object: &'a Map<String, Value>,
}

impl<'a> JsonRecord<'a> {
    /// Pair `value` with `schema`. Only JSON objects are records.
    pub fn new(schema: &'a Schema, value: &'a Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(object) => Ok(Self { schema, object }),
            other => Err(SchemaError::NotARecord {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

impl Record for JsonRecord<'_> {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        self.schema
            .fields
            .iter()
            .map(|field| {
                let value = match self.object.get(&field.name) {
                    None | Some(Value::Null) => empty_value(&field.annotation),
                    Some(value) => field_value(value),
                };
                FieldSpec::new(&field.name, Some(&field.annotation), value)
            })
            .collect()
    }

    fn record_name(&self) -> &str {
        &self.schema.name
    }

    fn loosely_typed(&self) -> bool {
        true
    }
}

/// Value an absent or `null` key stands for under the field's rule
fn empty_value(annotation: &str) -> FieldValue<'static> {
    match Annotation::parse(annotation).name() {
        NumberValidator::NAME => FieldValue::Int(0),
        StringValidator::NAME | UuidValidator::NAME => FieldValue::Str(""),
        _ => FieldValue::Unset,
    }
}

fn field_value(value: &Value) -> FieldValue<'_> {
    match value {
        Value::String(s) => FieldValue::Str(s),
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Int(i)
            } else if let Some(u) = n.as_u64() {
                FieldValue::Uint(u)
            } else {
                FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        other => FieldValue::Other(other),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Validator {
    /// Validate a JSON value against a runtime schema.
    ///
    /// Missing keys and `null` count as the empty value for the field's rule
    /// (`""` or `0`). A JSON value of the wrong type is an `invalid_type`
    /// violation.
    ///
    /// # Panics
    ///
    /// Panics when `value` is not a JSON object, or on a malformed annotation
    /// (see [`Validator::validate`]).
    pub fn validate_json(&self, schema: &Schema, value: &Value) -> ValidationResult<()> {
        match JsonRecord::new(schema, value) {
            Ok(record) => self.validate(&record),
            Err(err) => fatal(schema.name(), err),
        }
    }
}
