//! Procedural macros for the docwire project.
//!
//! This crate provides `#[derive(Entity)]`, which generates typed field selectors for a
//! struct so updates can name fields without string literals. Field names follow serde:
//! `#[serde(rename = "...")]` and `#[serde(rename_all = "...")]` are honoured, and fields
//! marked `skip`, `skip_serializing` or `flatten` get no selector.
//!
//! The expansion refers to the `docwire` facade when the deriving crate depends on it, and
//! to `docwire-core` otherwise.

#[allow(unused_extern_crates)]
extern crate self as docwire_macros;

mod crate_paths;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Fields, LitStr, Token, parse_macro_input,
    spanned::Spanned,
};

/// Derives `docwire::field::Entity` for a struct with named fields.
///
/// For `struct Post` this generates a unit struct `PostFields` with one method per
/// serialized field, each returning a `Selector<Post, FieldType>`.
#[proc_macro_derive(Entity)]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_entity(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_entity(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Entity cannot be derived for generic types",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            Span::call_site(),
            "Entity can only be derived for structs",
        ));
    };

    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "Entity can only be derived for structs with named fields",
        ));
    };

    let container = SerdeAttrs::parse(&input.attrs)?;
    let krate = crate_paths::get_docwire_crate()?;
    let name = &input.ident;
    let vis = &input.vis;
    let fields_ident = format_ident!("{}Fields", name);

    let mut accessors = Vec::new();
    for field in &named.named {
        let attrs = SerdeAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let Some(ident) = &field.ident else { continue };
        let ty = &field.ty;
        let field_vis = &field.vis;
        let rust_name = ident.to_string();
        let rust_name = rust_name.trim_start_matches("r#");
        let serialized = match attrs.rename {
            Some(rename) => rename,
            None => match &container.rename_all {
                Some(case) => case.apply(rust_name),
                None => rust_name.to_string(),
            },
        };

        let field_doc = format!("Selects the `{serialized}` field.");

        accessors.push(quote! {
            #[doc = #field_doc]
            #field_vis fn #ident(&self) -> #krate::field::Selector<#name, #ty> {
                #krate::field::Selector::member(#serialized)
            }
        });
    }

    let doc = format!("Field selectors for [`{name}`].");

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #fields_ident;

        impl #fields_ident {
            #(#accessors)*
        }

        impl #krate::field::Entity for #name {
            type Fields = #fields_ident;

            fn fields() -> Self::Fields {
                #fields_ident
            }
        }
    })
}

#[derive(Default)]
struct SerdeAttrs {
    rename: Option<String>,
    rename_all: Option<RenameRule>,
    skip: bool,
}

impl SerdeAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = SerdeAttrs::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Some(lit) = parse_serialize_name(&meta)? {
                        parsed.rename = Some(lit.value());
                    }
                } else if meta.path.is_ident("rename_all") {
                    if let Some(lit) = parse_serialize_name(&meta)? {
                        parsed.rename_all = Some(RenameRule::from_lit(&lit)?);
                    }
                } else if meta.path.is_ident("skip")
                    || meta.path.is_ident("skip_serializing")
                    || meta.path.is_ident("flatten")
                {
                    parsed.skip = true;
                } else if meta.input.peek(Token![=]) {
                    meta.value()?.parse::<syn::Expr>()?;
                } else if meta.input.peek(syn::token::Paren) {
                    meta.parse_nested_meta(|nested| {
                        if nested.input.peek(Token![=]) {
                            nested.value()?.parse::<syn::Expr>()?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })?;
        }

        Ok(parsed)
    }
}

/// Reads `rename = "x"` or the `serialize` half of `rename(serialize = "x", ...)`.
fn parse_serialize_name(meta: &syn::meta::ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return meta.value()?.parse().map(Some);
    }

    let mut serialize = None;
    meta.parse_nested_meta(|nested| {
        let lit: LitStr = nested.value()?.parse()?;
        if nested.path.is_ident("serialize") {
            serialize = Some(lit);
        }
        Ok(())
    })?;

    Ok(serialize)
}

#[derive(Clone, Copy)]
enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => RenameRule::Lower,
            "UPPERCASE" => RenameRule::Upper,
            "PascalCase" => RenameRule::Pascal,
            "camelCase" => RenameRule::Camel,
            "snake_case" => RenameRule::Snake,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnake,
            "kebab-case" => RenameRule::Kebab,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebab,
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unsupported rename_all rule: {other}"),
                ));
            }
        })
    }

    /// Converts a snake_case field name.
    fn apply(self, field: &str) -> String {
        match self {
            RenameRule::Lower | RenameRule::Snake => field.to_string(),
            RenameRule::Upper | RenameRule::ScreamingSnake => field.to_ascii_uppercase(),
            RenameRule::Kebab => field.replace('_', "-"),
            RenameRule::ScreamingKebab => field.replace('_', "-").to_ascii_uppercase(),
            RenameRule::Pascal => {
                let mut pascal = String::with_capacity(field.len());
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            }
            RenameRule::Camel => {
                let pascal = RenameRule::Pascal.apply(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn rule(name: &str) -> syn::Result<RenameRule> {
        RenameRule::from_lit(&LitStr::new(name, Span::call_site()))
    }

    fn rename(name: &str, field: &str) -> String {
        rule(name).unwrap().apply(field)
    }

    fn expand_error(input: DeriveInput) -> String {
        expand_entity(input).unwrap_err().to_string()
    }

    #[test]
    fn test_rename_rules() {
        assert_eq!(rename("lowercase", "view_count"), "view_count");
        assert_eq!(rename("UPPERCASE", "view_count"), "VIEW_COUNT");
        assert_eq!(rename("PascalCase", "view_count"), "ViewCount");
        assert_eq!(rename("camelCase", "view_count"), "viewCount");
        assert_eq!(rename("snake_case", "view_count"), "view_count");
        assert_eq!(rename("SCREAMING_SNAKE_CASE", "view_count"), "VIEW_COUNT");
        assert_eq!(rename("kebab-case", "view_count"), "view-count");
        assert_eq!(rename("SCREAMING-KEBAB-CASE", "view_count"), "VIEW-COUNT");
    }

    #[test]
    fn test_rename_rules_on_single_word() {
        assert_eq!(rename("PascalCase", "title"), "Title");
        assert_eq!(rename("camelCase", "title"), "title");
        assert_eq!(rename("kebab-case", "title"), "title");
    }

    #[test]
    fn test_unsupported_rename_rule() {
        let err = rule("Title Case").err().unwrap();
        assert_eq!(err.to_string(), "unsupported rename_all rule: Title Case");
    }

    #[test]
    fn test_skip_attributes() {
        for attr in [
            parse_quote!(#[serde(skip)]),
            parse_quote!(#[serde(skip_serializing)]),
            parse_quote!(#[serde(flatten)]),
        ] {
            assert!(SerdeAttrs::parse(&[attr]).unwrap().skip);
        }

        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(skip_serializing_if = "Option::is_none")])];
        assert!(!SerdeAttrs::parse(&attrs).unwrap().skip);
    }

    #[test]
    fn test_rename_attributes() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(default, rename = "_id")])];
        assert_eq!(SerdeAttrs::parse(&attrs).unwrap().rename.as_deref(), Some("_id"));

        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(rename(serialize = "out", deserialize = "in"))])];
        assert_eq!(SerdeAttrs::parse(&attrs).unwrap().rename.as_deref(), Some("out"));

        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(rename(deserialize = "in"))])];
        assert!(SerdeAttrs::parse(&attrs).unwrap().rename.is_none());

        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(rename_all = "Title Case")])];
        assert!(SerdeAttrs::parse(&attrs).is_err());
    }

    #[test]
    fn test_non_serde_attributes_are_ignored() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[doc = "Title"]), parse_quote!(#[allow(dead_code)])];
        let parsed = SerdeAttrs::parse(&attrs).unwrap();
        assert!(!parsed.skip);
        assert!(parsed.rename.is_none());
    }

    #[test]
    fn test_generic_struct_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Page<T> { items: Vec<T> }
        };
        assert_eq!(expand_error(input), "Entity cannot be derived for generic types");
    }

    #[test]
    fn test_enum_is_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Status { Draft, Published }
        };
        assert_eq!(expand_error(input), "Entity can only be derived for structs");
    }

    #[test]
    fn test_tuple_and_unit_structs_are_rejected() {
        for input in [
            parse_quote! { struct Score(i32); },
            parse_quote! { struct Marker; },
        ] {
            assert_eq!(
                expand_error(input),
                "Entity can only be derived for structs with named fields"
            );
        }
    }
}
