//! Debug-only mock/override hooks.
//!
//! Non-opaque directives emit a hidden override cell plus a setter. The
//! primary resolver consults the cell before any real construction or
//! recursive resolution happens, so an installed override short-circuits the
//! whole subgraph below the registered type. The setter exists in every
//! build profile; its body and the cell itself compile only with debug
//! assertions enabled.

use crate::names::{mock_holder_ident, mock_setter_ident};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::Type;

pub struct MockHooks {
    pub storage: TokenStream,
    pub setter: TokenStream,
    pub guard: TokenStream,
}

/// Hooks for construction-style kinds: the override is a factory closure
/// taking the directive's explicit parameters.
pub fn factory_hooks(
    container: &Ident,
    plain: &str,
    registered: &Type,
    explicit: &[(&Ident, &Type)],
) -> MockHooks {
    let holder = mock_holder_ident(container, plain);
    let setter = mock_setter_ident(plain);
    let types: Vec<&Type> = explicit.iter().map(|(_, ty)| *ty).collect();
    let names: Vec<&Ident> = explicit.iter().map(|(name, _)| *name).collect();
    let closure = quote!(Box<dyn Fn(#(#types),*) -> #registered + Send + Sync>);

    MockHooks {
        storage: quote! {
            #[cfg(debug_assertions)]
            static #holder: wirebox::MockCell<#closure> = wirebox::MockCell::new();
        },
        setter: quote! {
            impl #container {
                #[allow(unused_variables)]
                pub fn #setter(factory: Option<#closure>) {
                    #[cfg(debug_assertions)]
                    #holder.set(factory);
                }
            }
        },
        guard: quote! {
            #[cfg(debug_assertions)]
            if let Some(mock) = #holder.get().as_ref() {
                return mock(#(#names),*);
            }
        },
    }
}

/// Hooks for singleton kinds: the override is a precomputed instance.
pub fn singleton_hooks(container: &Ident, plain: &str, registered: &Type) -> MockHooks {
    let holder = mock_holder_ident(container, plain);
    let setter = mock_setter_ident(plain);

    MockHooks {
        storage: quote! {
            #[cfg(debug_assertions)]
            static #holder: wirebox::MockCell<#registered> = wirebox::MockCell::new();
        },
        setter: quote! {
            impl #container {
                #[allow(unused_variables)]
                pub fn #setter(singleton: Option<#registered>) {
                    #[cfg(debug_assertions)]
                    #holder.set(singleton);
                }
            }
        },
        guard: quote! {
            #[cfg(debug_assertions)]
            if let Some(mock) = #holder.get().as_ref() {
                return mock.clone();
            }
        },
    }
}
