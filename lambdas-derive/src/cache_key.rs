//! Implementation of the `#[derive(CacheKey)]` macro.
//!
//! Structs get a field-wise key built from the keys of their fields. Enums,
//! and structs marked `#[cache_key(by_value)]`, are their own key.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DataStruct, DeriveInput, Field, Generics, Ident, Index,
    Member,
};

/// Largest number of key fields; std implements `Eq` and `Hash` for tuples
/// up to this length.
const MAX_KEY_FIELDS: usize = 12;

/// Main implementation of the `CacheKey` derive macro.
pub fn derive_cache_key_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = &input.generics;
    let by_value = container_is_by_value(&input.attrs)?;

    match &input.data {
        Data::Struct(data_struct) if by_value => {
            reject_skipped_fields(data_struct)?;
            Ok(generate_by_value(name, generics))
        }
        Data::Struct(data_struct) => generate_field_wise(name, generics, data_struct),
        Data::Enum(_) => Ok(generate_by_value(name, generics)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "CacheKey cannot be derived for unions.",
        )),
    }
}

/// Reads `#[cache_key(by_value)]` from the container attributes.
fn container_is_by_value(attributes: &[Attribute]) -> syn::Result<bool> {
    let mut by_value = false;
    for attribute in attributes.iter().filter(|a| a.path().is_ident("cache_key")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("by_value") {
                by_value = true;
                Ok(())
            } else {
                Err(meta.error("expected `by_value`"))
            }
        })?;
    }
    Ok(by_value)
}

/// Reads `#[cache_key(skip)]` from a field's attributes.
fn field_is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attribute in field.attrs.iter().filter(|a| a.path().is_ident("cache_key")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn reject_skipped_fields(data_struct: &DataStruct) -> syn::Result<()> {
    for field in &data_struct.fields {
        if field_is_skipped(field)? {
            return Err(syn::Error::new_spanned(
                field,
                "`#[cache_key(skip)]` has no effect on a `#[cache_key(by_value)]` type",
            ));
        }
    }
    Ok(())
}

/// Generates an impl whose key is a clone of the value.
fn generate_by_value(name: &Ident, generics: &Generics) -> TokenStream2 {
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let mut predicates = where_clause.map_or_else(Vec::new, |clause| {
        clause.predicates.iter().map(|p| quote!(#p)).collect()
    });
    predicates.push(quote! {
        Self: ::std::clone::Clone + ::std::cmp::Eq + ::std::hash::Hash
    });

    quote! {
        impl #impl_generics ::lambdas::memoize::CacheKey for #name #type_generics
        where
            #(#predicates,)*
        {
            type Key = Self;

            #[inline]
            fn to_key(&self) -> Self::Key {
                ::std::clone::Clone::clone(self)
            }
        }
    }
}

/// Generates an impl whose key is the tuple of the non-skipped field keys.
fn generate_field_wise(
    name: &Ident,
    generics: &Generics,
    data_struct: &DataStruct,
) -> syn::Result<TokenStream2> {
    let mut key_fields: Vec<(Member, &syn::Type)> = Vec::new();
    for (position, field) in data_struct.fields.iter().enumerate() {
        if field_is_skipped(field)? {
            continue;
        }
        let member = field.ident.clone().map_or_else(
            || Member::Unnamed(Index::from(position)),
            Member::Named,
        );
        key_fields.push((member, &field.ty));
    }

    if key_fields.len() > MAX_KEY_FIELDS {
        return Err(syn::Error::new_spanned(
            name,
            format!(
                "CacheKey supports at most {MAX_KEY_FIELDS} key fields; \
                 skip some with `#[cache_key(skip)]` or use `#[cache_key(by_value)]`"
            ),
        ));
    }

    let key_types: Vec<TokenStream2> = key_fields
        .iter()
        .map(|(_, ty)| quote!(<#ty as ::lambdas::memoize::CacheKey>::Key))
        .collect();
    let key_values: Vec<TokenStream2> = key_fields
        .iter()
        .map(|(member, _)| quote!(::lambdas::memoize::CacheKey::to_key(&self.#member)))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let mut predicates = where_clause.map_or_else(Vec::new, |clause| {
        clause.predicates.iter().map(|p| quote!(#p)).collect()
    });
    if !generics.params.is_empty() {
        predicates.extend(
            key_fields
                .iter()
                .map(|(_, ty)| quote!(#ty: ::lambdas::memoize::CacheKey)),
        );
    }

    let (key_type, key_value) = if key_fields.is_empty() {
        (quote!(()), quote!(()))
    } else {
        (quote!((#(#key_types,)*)), quote!((#(#key_values,)*)))
    };

    Ok(quote! {
        impl #impl_generics ::lambdas::memoize::CacheKey for #name #type_generics
        where
            #(#predicates,)*
        {
            type Key = #key_type;

            #[inline]
            fn to_key(&self) -> Self::Key {
                #key_value
            }
        }
    })
}
