//! # tag-validator
//!
//! Validates records against constraints declared as field annotations and
//! reports every violation in one pass.
//!
//! ```ignore
//! use tag_validator::{Record, Validator};
//!
//! #[derive(Record)]
//! struct User {
//!     #[validate("uuid")]
//!     id: String,
//!     #[validate("string,min=2,max=10,pattern=^[a-zA-Z]+$")]
//!     name: String,
//!     #[validate("string,required,min=2,max=10")]
//!     last_name: String,
//!     #[validate("number,min=18,max=20")]
//!     age: i32,
//! }
//!
//! let errors = Validator::new().validate(&user).unwrap_err();
//! for violation in errors.causes() {
//!     println!("{}", violation);
//! }
//! ```
//!
//! Built-in rules:
//! - `number`: `min=<i64>`, `max=<i64>`
//! - `string`: `required`, `min=<len>`, `max=<len>`, `pattern=<regex>`
//! - `uuid`: canonical version 4 UUID
//!
//! A maximum only applies when it is not below the minimum. The annotation
//! `-` leaves a field unvalidated, and unknown rule names are ignored.

extern crate self as tag_validator;

pub mod annotation;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod registry;
pub mod traits;
pub mod validator;
pub mod validators;
pub mod value;

// Re-exports for easy access
pub use annotation::{Annotation, Bounds, Param, Params};
pub use config::ValidatorConfig;
pub use dynamic::{JsonRecord, Schema};
pub use error::{CheckError, CheckResult, SchemaError, ValidationErrors, ValidationResult, Violation};
pub use registry::RuleRegistry;
pub use traits::{Record, ValidationRule};
pub use validator::{Validator, ValidatorBuilder};
pub use value::{FieldSpec, FieldValue, ToFieldValue};

// Built-in validators
pub use validators::{
    custom::CustomValidator,
    numeric::NumberValidator,
    string::StringValidator,
    uuid::UuidValidator,
};

#[cfg(feature = "derive")]
pub use tag_validator_derive::Record;
