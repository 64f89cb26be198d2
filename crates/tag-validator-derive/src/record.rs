//! Record derive implementation
//!
//! Expands a struct into a `Record` impl listing every field in declaration
//! order with its annotation and value.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Token,
};

/// Annotation that disables validation; the field's value is never read
const SKIP: &str = "-";

/// Main implementation function for the Record derive
pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_record(&input) {
        Ok(result) => result.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Arguments of one `#[validate(...)]` attribute
struct ValidateArgs {
    annotation: LitStr,
    rename: Option<LitStr>,
}

impl Parse for ValidateArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let annotation: LitStr = input.parse()?;
        let mut rename = None;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;

            if key == "rename" {
                if rename.is_some() {
                    return Err(Error::new_spanned(key, "duplicate `rename`"));
                }
                rename = Some(value);
            } else {
                return Err(Error::new_spanned(
                    key,
                    "unknown option, expected `rename = \"...\"`",
                ));
            }
        }

        Ok(Self { annotation, rename })
    }
}

/// What the derive learned about one field
struct FieldInfo<'a> {
    ident: &'a Ident,
    name: String,
    annotation: Option<LitStr>,
}

fn expand_record(input: &DeriveInput) -> Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new_spanned(
                    input,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                input,
                "Record can only be derived for structs with named fields",
            ))
        }
    };

    let infos = fields
        .iter()
        .map(field_info)
        .collect::<Result<Vec<_>>>()?;

    let specs = infos.iter().map(|info| {
        let ident = info.ident;
        let name = &info.name;
        match &info.annotation {
            Some(annotation) if annotation.value() == SKIP => quote! {
                ::tag_validator::FieldSpec::new(
                    #name,
                    ::std::option::Option::Some(#annotation),
                    ::tag_validator::FieldValue::Unset,
                )
            },
            Some(annotation) => quote! {
                ::tag_validator::FieldSpec::new(
                    #name,
                    ::std::option::Option::Some(#annotation),
                    ::tag_validator::ToFieldValue::to_field_value(&self.#ident),
                )
            },
            None => quote! {
                ::tag_validator::FieldSpec::unannotated(#name)
            },
        }
    });

    let struct_name = &input.ident;
    let record_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tag_validator::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::tag_validator::FieldSpec<'_>> {
                ::std::vec![#(#specs),*]
            }

            fn record_name(&self) -> &str {
                #record_name
            }
        }
    })
}

fn field_info(field: &Field) -> Result<FieldInfo<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;

    let mut args: Option<ValidateArgs> = None;
    for attr in field.attrs.iter().filter(|attr| is_validate(attr)) {
        if args.is_some() {
            return Err(Error::new_spanned(
                attr,
                "a field takes at most one #[validate] attribute",
            ));
        }
        args = Some(attr.parse_args::<ValidateArgs>()?);
    }

    let name = args
        .as_ref()
        .and_then(|args| args.rename.as_ref())
        .map(LitStr::value)
        .unwrap_or_else(|| strip_raw(ident));

    Ok(FieldInfo {
        ident,
        name,
        annotation: args.map(|args| args.annotation),
    })
}

fn is_validate(attr: &Attribute) -> bool {
    attr.path().is_ident("validate")
}

fn strip_raw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
