//! `#[derive(WalkAst)]` for syntax tree nodes.
//!
//! The generated `Walk` impl walks every field in declaration order. Fields
//! marked `#[walk(skip)]` are left out, which is how side references such as
//! doc comment groups stay out of ordinary traversals.

use proc_macro::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::{Data, DeriveInput, Field, Fields, Index, parse_macro_input, spanned::Spanned};

#[proc_macro_derive(WalkAst, attributes(walk))]
pub fn derive_walk_ast(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let span = input.span();

    let walk_body = match walk_body(&input.data) {
        Ok(body) => body,
        Err(err) => return err.into_compile_error().into(),
    };

    let expanded = quote_spanned! {span =>
        impl<'ast> crate::walk::Walk<'ast> for #name {
            #[inline(always)]
            #[allow(unused_variables)]
            fn walk<V: crate::walk::Visitor<'ast> + ?Sized>(
                &self,
                a: &'ast crate::ast::AstArena,
                v: &mut V
            ) {
                #walk_body
            }
        }
    };

    expanded.into()
}

fn walk_body(data: &Data) -> syn::Result<proc_macro2::TokenStream> {
    match data {
        Data::Struct(s) => {
            let mut calls = Vec::new();
            for (i, field) in s.fields.iter().enumerate() {
                if is_skipped(field)? {
                    continue;
                }
                let access = match &field.ident {
                    Some(ident) => quote! { &self.#ident },
                    None => {
                        let index = Index::from(i);
                        quote! { &self.#index }
                    }
                };
                calls.push(quote! { crate::walk::Walk::walk(#access, a, v); });
            }
            Ok(quote! { #(#calls)* })
        }
        Data::Enum(e) => {
            let arms = e
                .variants
                .iter()
                .map(|variant| variant_arm(&variant.ident, &variant.fields))
                .collect::<syn::Result<Vec<_>>>()?;
            Ok(quote! {
                match self {
                    #(#arms)*
                }
            })
        }
        Data::Union(u) => Err(syn::Error::new_spanned(
            u.union_token,
            "WalkAst cannot be derived for unions",
        )),
    }
}

fn variant_arm(variant: &syn::Ident, fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
    match fields {
        Fields::Unit => Ok(quote! { Self::#variant => {} }),
        Fields::Named(named) => {
            let mut bindings = Vec::new();
            let mut calls = Vec::new();
            for field in &named.named {
                let Some(ident) = field.ident.as_ref() else {
                    continue;
                };
                if is_skipped(field)? {
                    bindings.push(quote! { #ident: _ });
                } else {
                    bindings.push(quote! { #ident });
                    calls.push(quote! { crate::walk::Walk::walk(#ident, a, v); });
                }
            }
            Ok(quote! {
                Self::#variant { #(#bindings),* } => {
                    #(#calls)*
                }
            })
        }
        Fields::Unnamed(unnamed) => {
            let mut bindings = Vec::new();
            let mut calls = Vec::new();
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                if is_skipped(field)? {
                    bindings.push(quote! { _ });
                    continue;
                }
                let var = format_ident!("f{}", i);
                calls.push(quote! { crate::walk::Walk::walk(#var, a, v); });
                bindings.push(quote! { #var });
            }
            Ok(quote! {
                Self::#variant(#(#bindings),*) => {
                    #(#calls)*
                }
            })
        }
    }
}

/// `true` when the field carries `#[walk(skip)]`.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("walk")) {
        attr.parse_nested_meta(|meta| {
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
