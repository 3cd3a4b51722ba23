//! Attribute macros generating static dependency resolvers for the
//! `wirebox` crate. See the `wirebox` documentation for the registration
//! surface; this crate only hosts the expansion engine.

use crate::directive::{DirectiveArgs, DirectiveKind, RegistrationDirective};
use crate::error::ExpansionError;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Item};

mod classify;
mod directive;
mod error;
mod expand;
mod mock;
mod names;

/// Registers a dependency by auto-resolving every factory input.
///
/// The first argument is the registered type, the last the factory; types in
/// between are the factory's inputs, each resolved recursively through the
/// container.
#[proc_macro_attribute]
pub fn auto_register(args: TokenStream, item: TokenStream) -> TokenStream {
    register(DirectiveKind::Auto, args, item)
}

/// Registers a dependency whose factory inputs are exposed to the caller.
///
/// Parameter entries are either bare types (all explicit), or tagged
/// `resolved(Type)` / `explicit(name: Type)` entries mixing recursive
/// resolution with caller-supplied values.
#[proc_macro_attribute]
pub fn factory_register(args: TokenStream, item: TokenStream) -> TokenStream {
    register(DirectiveKind::Factory, args, item)
}

/// Registers a dependency constructed at most once per process; every
/// resolution returns a clone of the shared instance.
#[proc_macro_attribute]
pub fn singleton_register(args: TokenStream, item: TokenStream) -> TokenStream {
    register(DirectiveKind::Singleton, args, item)
}

/// Like [`macro@auto_register`], but the resolver returns an opaque
/// `impl Trait` handle so call sites cannot observe the concrete type.
#[proc_macro_attribute]
pub fn opaque_auto_register(args: TokenStream, item: TokenStream) -> TokenStream {
    register(DirectiveKind::OpaqueAuto, args, item)
}

/// Like [`macro@factory_register`], but with an opaque return.
#[proc_macro_attribute]
pub fn opaque_factory_register(args: TokenStream, item: TokenStream) -> TokenStream {
    register(DirectiveKind::OpaqueFactory, args, item)
}

/// Like [`macro@singleton_register`], but the shared instance is erased to
/// the registered capability set.
#[proc_macro_attribute]
pub fn opaque_singleton_register(args: TokenStream, item: TokenStream) -> TokenStream {
    register(DirectiveKind::OpaqueSingleton, args, item)
}

fn register(kind: DirectiveKind, args: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);

    // Failure stays local to this directive: the decorated item is always
    // re-emitted so sibling directives and call sites keep expanding.
    syn::parse2::<DirectiveArgs>(args.into())
        .and_then(|args| expand_directive(kind, args, &item))
        .map(|declarations| quote! { #item #declarations })
        .unwrap_or_else(|error| {
            let error = error.into_compile_error();
            quote! { #item #error }
        })
        .into()
}

fn expand_directive(
    kind: DirectiveKind,
    args: DirectiveArgs,
    item: &Item,
) -> syn::Result<proc_macro2::TokenStream> {
    let container = names::container_ident(item)
        .ok_or_else(|| ExpansionError::InvalidDeclaration.into_syn(item.span()))?;
    let directive = RegistrationDirective::from_args(kind, args)?;
    expand::expand(&container, &directive)
}
