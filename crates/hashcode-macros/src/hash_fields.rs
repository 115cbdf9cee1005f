//! #[derive(HashFields)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Visibility};

use crate::has_attribute;

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "#[derive(HashFields)] does not support generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "#[derive(HashFields)] requires named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "#[derive(HashFields)] only works on structs",
            ))
        }
    };

    let descriptors: Vec<_> = fields
        .iter()
        .filter(|f| matches!(f.vis, Visibility::Public(_)))
        .filter(|f| !has_attribute(&f.attrs, "hash_skip"))
        .filter_map(|f| f.ident.as_ref())
        .map(|field_name| {
            let field_name_str = field_name.to_string();
            quote! {
                {
                    fn get(entity: &#name) -> &dyn ::hashcode::__internal::FieldHash {
                        &entity.#field_name
                    }
                    ::hashcode::__internal::FieldDescriptor::<#name>::new(#field_name_str, get)
                }
            }
        })
        .collect();

    let name_str = name.to_string();

    let expanded = quote! {
        impl ::hashcode::__internal::HashFields for #name {
            const TYPE_NAME: &'static str = #name_str;
            const FIELDS: &'static [::hashcode::__internal::FieldDescriptor<Self>] = &[
                #( #descriptors ),*
            ];
        }
    };

    Ok(expanded)
}
