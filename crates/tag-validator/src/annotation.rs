//! Annotation grammar: `"<name>[,<param>]*"`.
//!
//! The first comma-separated segment names the rule; every following segment
//! is either a bare flag (`required`) or a `key=value` pair (`min=2`). Values
//! are split on the first `=` only, so `pattern=^a=b$` keeps its `=`. Commas
//! always separate parameters, which means a pattern cannot contain one
//! (`{2,5}` quantifiers are not expressible).

use crate::error::SchemaError;
use std::fmt;

/// One parameter token of an annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Bare token such as `required`
    Flag(String),
    /// `key=value` token
    KeyValue { key: String, value: String },
}

impl Param {
    fn parse(token: &str) -> Self {
        match token.split_once('=') {
            Some((key, value)) => Param::KeyValue {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Param::Flag(token.to_string()),
        }
    }

    /// The flag name or the key
    pub fn name(&self) -> &str {
        match self {
            Param::Flag(name) => name,
            Param::KeyValue { key, .. } => key,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Flag(name) => f.write_str(name),
            Param::KeyValue { key, value } => write!(f, "{}={}", key, value),
        }
    }
}

/// A parsed annotation: rule name plus its ordered parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    params: Params,
}

impl Annotation {
    /// Parse a raw annotation. Never fails; an empty string yields an empty
    /// name with no parameters.
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(',');
        let name = segments.next().unwrap_or_default().trim().to_string();
        let params = segments
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Param::parse)
            .collect();

        Self {
            name,
            params: Params::new(params),
        }
    }

    /// Whether a raw annotation means "do not validate this field"
    pub fn is_skip(raw: &str, skip_token: &str) -> bool {
        let raw = raw.trim();
        raw.is_empty() || raw == skip_token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Order-independent view over an annotation's parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    raw: Vec<Param>,
}

impl Params {
    pub fn new(raw: Vec<Param>) -> Self {
        Self { raw }
    }

    /// Parameters in annotation order
    pub fn raw(&self) -> &[Param] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether a bare flag is present
    pub fn flag(&self, name: &str) -> bool {
        self.raw
            .iter()
            .any(|param| matches!(param, Param::Flag(flag) if flag == name))
    }

    /// Value of a `key=value` parameter; the last occurrence wins
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw.iter().rev().find_map(|param| match param {
            Param::KeyValue { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Integer parameter. A value that is not an integer is a schema error.
    pub fn int(&self, field: &str, key: &str) -> Result<Option<i64>, SchemaError> {
        match self.get(key) {
            Some(value) => value
                .parse::<i64>()
                .map(Some)
                .map_err(|_| SchemaError::invalid_parameter(field, key, value)),
            None => Ok(None),
        }
    }

    /// `min`/`max` bounds
    pub fn bounds(&self, field: &str) -> Result<Bounds, SchemaError> {
        Ok(Bounds {
            min: self.int(field, "min")?.unwrap_or(0),
            max: self.int(field, "max")?,
        })
    }

    /// Configured pattern; an empty value means no pattern
    pub fn pattern(&self) -> Option<&str> {
        self.get("pattern").filter(|pattern| !pattern.is_empty())
    }
}

impl From<Vec<Param>> for Params {
    fn from(raw: Vec<Param>) -> Self {
        Self::new(raw)
    }
}

/// Inclusive range bounds.
///
/// `min` defaults to 0 and is always enforced. `max` takes part only when it
/// was given and is not below `min`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: Option<i64>,
}

impl Bounds {
    pub fn new(min: i64, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// The maximum, if it is active
    pub fn active_max(&self) -> Option<i64> {
        self.max.filter(|max| *max >= self.min)
    }
}
