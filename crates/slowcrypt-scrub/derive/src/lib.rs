// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `#[derive(Scrub)]` for the `slowcrypt-scrub` crates.

#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Index, LitStr, Meta, Type, parse_macro_input};

/// Derives `Scrub`, `ScrubLayout`, `ScrubProbe` and, when a sentinel field is
/// present, `AssertScrubOnDrop`.
///
/// # Sentinel field
///
/// A named field called `__sentinel`, or an unnamed field of type
/// `ScrubSentinel`, is scrubbed with the rest of the struct but ignored by
/// `ScrubProbe`.
///
/// # Attributes
///
/// - `#[scrub(drop)]` on the struct: also generates `Drop` calling `scrub()`.
/// - `#[scrub(skip)]` on a field: leaves the field out of both `Scrub` and
///   `ScrubProbe`. Required for `&T` fields.
///
/// ```rust
/// use slowcrypt_scrub_core::{AssertScrubOnDrop, ScrubProbe, ScrubSentinel};
/// use slowcrypt_scrub_derive::Scrub;
///
/// #[derive(Scrub)]
/// #[scrub(drop)]
/// struct Session {
///     key: [u8; 32],
///     counter: u32,
///     __sentinel: ScrubSentinel,
/// }
///
/// let session = Session {
///     key: [7; 32],
///     counter: 1,
///     __sentinel: ScrubSentinel::default(),
/// };
///
/// assert!(!session.is_scrubbed());
/// session.assert_scrub_on_drop();
/// ```
#[proc_macro_derive(Scrub, attributes(scrub))]
pub fn derive_scrub(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Resolves the path of the first candidate crate the caller depends on.
fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => return quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                return quote!(#id);
            }
            Err(_) => continue,
        }
    }

    let msg = "Scrub: could not find slowcrypt-scrub or slowcrypt-scrub-core. Add slowcrypt-scrub to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

fn is_sentinel_type(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Path(type_path)
        if type_path.path.segments.last()
            .map(|seg| seg.ident == "ScrubSentinel")
            .unwrap_or(false)
    )
}

fn is_mut_reference_type(ty: &Type) -> bool {
    matches!(ty, Type::Reference(r) if r.mutability.is_some())
}

fn is_immut_reference_type(ty: &Type) -> bool {
    matches!(ty, Type::Reference(r) if r.mutability.is_none())
}

/// Checks for `#[scrub(<flag>)]` among the attributes.
fn has_scrub_flag(attrs: &[Attribute], flag: &str) -> bool {
    attrs.iter().any(|attr| match &attr.meta {
        Meta::List(meta_list) => {
            meta_list.path.is_ident("scrub")
                && meta_list
                    .tokens
                    .clone()
                    .into_iter()
                    .any(|tt| tt.to_string() == flag)
        }
        _ => false,
    })
}

/// Accessor expressions for one field: shared and exclusive.
struct FieldAccess {
    shared: TokenStream2,
    exclusive: TokenStream2,
}

fn field_access(index: usize, field: &syn::Field) -> FieldAccess {
    let member = match &field.ident {
        Some(ident) => quote! { #ident },
        None => {
            let idx = Index::from(index);
            quote! { #idx }
        }
    };

    // A `&mut T` field is already a reference; borrowing it again would
    // produce `&mut &mut T`, which does not implement the traits.
    if is_mut_reference_type(&field.ty) {
        FieldAccess {
            shared: quote! { self.#member },
            exclusive: quote! { self.#member },
        }
    } else {
        FieldAccess {
            shared: quote! { &self.#member },
            exclusive: quote! { &mut self.#member },
        }
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let root = find_root_with_candidates(&["slowcrypt-scrub-core", "slowcrypt-scrub", "slowcrypt"]);

    let all_fields: Vec<(usize, &syn::Field)> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().enumerate().collect(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().enumerate().collect(),
            Fields::Unit => vec![],
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Scrub can only be derived for structs (named or tuple).",
            )
            .to_compile_error());
        }
    };

    let sentinel_ident = format_ident!("__sentinel");
    let sentinel = all_fields.iter().find(|(_, f)| match &f.ident {
        Some(ident) => *ident == sentinel_ident,
        None => is_sentinel_type(&f.ty),
    });
    let sentinel_idx = sentinel.map(|(i, _)| *i);

    for (i, f) in &all_fields {
        if Some(*i) == sentinel_idx {
            continue;
        }

        if is_immut_reference_type(&f.ty) && !has_scrub_flag(&f.attrs, "skip") {
            let field_name = match &f.ident {
                Some(ident) => format!("field `{}`", ident),
                None => format!("field at index {}", i),
            };

            return Err(syn::Error::new_spanned(
                &f.ty,
                format!(
                    "{} has type `&T` which cannot be scrubbed. Add `#[scrub(skip)]` to exclude it.",
                    field_name
                ),
            )
            .to_compile_error());
        }
    }

    let scrubbed: Vec<FieldAccess> = all_fields
        .iter()
        .filter(|(_, f)| !has_scrub_flag(&f.attrs, "skip"))
        .map(|(i, f)| field_access(*i, f))
        .collect();

    let probed: Vec<FieldAccess> = all_fields
        .iter()
        .filter(|(i, f)| Some(*i) != sentinel_idx && !has_scrub_flag(&f.attrs, "skip"))
        .map(|(i, f)| field_access(*i, f))
        .collect();

    let exclusive_refs = scrubbed.iter().map(|a| &a.exclusive);
    let shared_refs = probed.iter().map(|a| &a.shared);

    let scrubbed_len = syn::LitInt::new(&scrubbed.len().to_string(), Span::call_site());
    let probed_len = syn::LitInt::new(&probed.len().to_string(), Span::call_site());

    let drop_impl = if has_scrub_flag(&input.attrs, "drop") {
        quote! {
            impl #impl_generics Drop for #struct_name #ty_generics #where_clause {
                fn drop(&mut self) {
                    #root::Scrub::scrub(self);
                }
            }
        }
    } else {
        quote! {}
    };

    let assert_impl = match sentinel {
        Some((i, f)) => {
            let access = field_access(*i, f).shared;
            quote! {
                impl #impl_generics #root::AssertScrubOnDrop for #struct_name #ty_generics #where_clause {
                    fn clone_sentinel(&self) -> #root::ScrubSentinel {
                        ::core::clone::Clone::clone(#access)
                    }

                    fn assert_scrub_on_drop(self) {
                        #root::assert::assert_scrub_on_drop(self);
                    }
                }
            }
        }
        None => quote! {},
    };

    Ok(quote! {
        impl #impl_generics #root::ScrubLayout for #struct_name #ty_generics #where_clause {
            const BULK: bool = false;
        }

        impl #impl_generics #root::Scrub for #struct_name #ty_generics #where_clause {
            fn scrub(&mut self) {
                let fields: [&mut dyn #root::Scrub; #scrubbed_len] = [
                    #( #root::collections::to_scrub_dyn_mut(#exclusive_refs) ),*
                ];
                #root::collections::scrub_collection(&mut fields.into_iter())
            }
        }

        impl #impl_generics #root::ScrubProbe for #struct_name #ty_generics #where_clause {
            fn is_scrubbed(&self) -> bool {
                let fields: [&dyn #root::ScrubProbe; #probed_len] = [
                    #( #root::collections::to_probe_dyn_ref(#shared_refs) ),*
                ];
                #root::collections::collection_scrubbed(&mut fields.into_iter())
            }
        }

        #drop_impl
        #assert_impl
    })
}
