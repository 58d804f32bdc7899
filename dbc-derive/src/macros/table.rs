//! Derive macro for Table
//!
//! Generates the `dbc::Table` implementation and the `{Struct}Fields` template
//! of typed field keys.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attributes;
use crate::utils;

/// Generate the `Table` implementation and the field-key template struct
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let vis = &input.vis;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Table cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Table can only be derived for structs with named fields",
            ));
        }
    };

    let table_name = attributes::extract_table_name(&input.attrs)?
        .unwrap_or_else(|| utils::snake_case(&struct_name.to_string()));
    let entity_name = struct_name.to_string();
    let fields_struct = format_ident!("{}Fields", struct_name);

    let mut key_decls = Vec::new();
    let mut key_inits = Vec::new();
    let mut metas = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_vis = &field.vis;
        let field_type = &field.ty;
        let name_str = field_name.to_string();
        let column = match attributes::extract_column_name(field)? {
            Some(col) => quote! { ::core::option::Option::Some(#col) },
            None => quote! { ::core::option::Option::None },
        };

        key_decls.push(quote! {
            #field_vis #field_name: ::dbc::Field<#struct_name, #field_type>,
        });

        key_inits.push(quote! {
            #field_name: ::dbc::Field::new(
                ::core::mem::offset_of!(#struct_name, #field_name),
                #name_str,
            ),
        });

        metas.push(quote! {
            ::dbc::FieldMeta::new(
                ::core::mem::offset_of!(#struct_name, #field_name),
                #name_str,
                #column,
                |entity: &#struct_name| -> ::dbc::Value {
                    ::dbc::ValueType::into_value(::core::clone::Clone::clone(&entity.#field_name))
                },
                |entity: &mut #struct_name, value: ::dbc::Value|
                    -> ::core::result::Result<(), ::dbc::ValueExtractionError>
                {
                    entity.#field_name = <#field_type as ::dbc::ValueType>::try_from_value(value)?;
                    ::core::result::Result::Ok(())
                },
            ),
        });
    }

    let fields_doc = format!("Typed field keys of [`{struct_name}`], one per declared field.");

    Ok(quote! {
        #[doc = #fields_doc]
        #[derive(Debug, Clone, Copy)]
        #vis struct #fields_struct {
            #(#key_decls)*
        }

        impl ::dbc::Table for #struct_name {
            type Fields = #fields_struct;

            fn table_name() -> &'static str {
                #table_name
            }

            fn entity_name() -> &'static str {
                #entity_name
            }

            fn fields() -> Self::Fields {
                #fields_struct {
                    #(#key_inits)*
                }
            }

            fn describe_fields() -> ::std::vec::Vec<::dbc::FieldMeta<Self>> {
                ::std::vec![
                    #(#metas)*
                ]
            }
        }
    })
}
