//! # tag-validator-derive
//!
//! Derive macro for the tag-validator record description.
//!
//! - `#[derive(Record)]`: implement `tag_validator::Record` for a struct with
//!   named fields, reading each field's `#[validate("...")]` annotation

use proc_macro::TokenStream;

mod record;

/// Derive `tag_validator::Record`.
///
/// ```ignore
/// #[derive(Record)]
/// struct User {
///     #[validate("uuid")]
///     id: String,
///     #[validate("string,required,min=2,max=10", rename = "lastName")]
///     last_name: String,
///     internal: Vec<u8>, // not annotated, never validated
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
