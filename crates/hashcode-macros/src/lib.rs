//! Macros for hashcode entities.

use proc_macro::TokenStream;
use syn::{parse_macro_input, Attribute, DeriveInput};

mod hash_fields;

/// Derives `HashFields` from the public named fields of a struct.
///
/// Fields are listed in declaration order. Private fields are not part of
/// the list; a public field marked `#[hash_skip]` is left out as well.
#[proc_macro_derive(HashFields, attributes(hash_skip))]
pub fn derive_hash_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    hash_fields::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
