//! Runtime field values carried from a record into its rules

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// The value of one record field, as seen by a rule.
///
/// Built-in rules match on the variants they accept and report anything else
/// as a schema error. `Other` lets custom rules receive their own types.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Str(&'a str),
    Other(&'a dyn Any),
    /// The field carries no value (it is not annotated, or a dynamic record
    /// lacks it)
    Unset,
}

impl<'a> FieldValue<'a> {
    /// Name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Uint(_) => "unsigned integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Str(_) => "string",
            FieldValue::Other(_) => "custom value",
            FieldValue::Unset => "no value",
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer-family values widened so signed and unsigned compare safely
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            FieldValue::Int(v) => Some(i128::from(*v)),
            FieldValue::Uint(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    /// Downcast a custom value
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match *self {
            FieldValue::Other(v) => v.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Unset)
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            FieldValue::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            FieldValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
            FieldValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            FieldValue::Str(v) => f.debug_tuple("Str").field(v).finish(),
            FieldValue::Other(_) => f.write_str("Other(..)"),
            FieldValue::Unset => f.write_str("Unset"),
        }
    }
}

/// One field of a record during a validation pass
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<'a> {
    /// Field name, unique within the record
    pub name: &'a str,
    /// Raw annotation, if the field has one
    pub annotation: Option<&'a str>,
    /// Current value
    pub value: FieldValue<'a>,
}

impl<'a> FieldSpec<'a> {
    pub fn new(name: &'a str, annotation: Option<&'a str>, value: FieldValue<'a>) -> Self {
        Self {
            name,
            annotation,
            value,
        }
    }

    /// A field without an annotation; never validated
    pub fn unannotated(name: &'a str) -> Self {
        Self::new(name, None, FieldValue::Unset)
    }
}

/// Types that can be handed to rules as a [`FieldValue`]
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Uint(u64::from(*self))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl ToFieldValue for isize {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i64)
    }
}

impl ToFieldValue for usize {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Uint(*self as u64)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl ToFieldValue for Box<str> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(&**self)
    }
}

impl ToFieldValue for Cow<'_, str> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

impl<T> ToFieldValue for &T
where
    T: ToFieldValue + ?Sized,
{
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}
