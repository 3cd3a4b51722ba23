//! Expansion of classified directives into resolver declaration sets.
//!
//! Each expander is a pure function from (container identity, directive) to
//! an ordered token sequence. The emission order is fixed — mock storage,
//! mock setter, singleton holder, primary resolver, convenience trait impl,
//! factory-object type, factory accessors — so repeated expansion of the
//! same input is byte-identical.

use crate::classify::{classify, Classification, ParameterSpec};
use crate::directive::{DirectiveKind, RegistrationDirective};
use crate::error::ExpansionError;
use crate::mock::{self, MockHooks};
use crate::names::{
    factory_accessor_ident, factory_struct_ident, holder_ident, lazy_accessor_ident,
    plain_type_name, resolver_ident,
};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Token, Type, TypeParamBound};

pub fn expand(container: &Ident, directive: &RegistrationDirective) -> syn::Result<TokenStream> {
    let parameters = classify(directive)?;
    let plain = plain_type_name(&directive.registered_type).ok_or_else(|| {
        let ty = &directive.registered_type;
        ExpansionError::UnsupportedType(quote!(#ty).to_string()).into_syn(ty.span())
    })?;

    match directive.kind {
        DirectiveKind::Auto => Ok(expand_auto(container, directive, &parameters, &plain)),
        DirectiveKind::Factory => Ok(expand_factory(container, directive, &parameters, &plain)),
        DirectiveKind::Singleton => {
            Ok(expand_singleton(container, directive, &parameters, &plain))
        }
        DirectiveKind::OpaqueAuto => {
            Ok(expand_opaque_auto(container, directive, &parameters, &plain))
        }
        DirectiveKind::OpaqueFactory => {
            Ok(expand_opaque_factory(container, directive, &parameters, &plain))
        }
        DirectiveKind::OpaqueSingleton => {
            Ok(expand_opaque_singleton(container, directive, &parameters, &plain))
        }
    }
}

fn expand_auto(
    container: &Ident,
    directive: &RegistrationDirective,
    parameters: &[ParameterSpec],
    plain: &str,
) -> TokenStream {
    let registered = &directive.registered_type;
    let factory = &directive.factory;
    let resolver = resolver_ident(plain);
    let args = invocation_args(directive.kind, container, parameters);
    let MockHooks {
        storage,
        setter,
        guard,
    } = mock::factory_hooks(container, plain, registered, &[]);

    quote! {
        #storage

        #setter

        impl #container {
            pub fn #resolver() -> #registered {
                #guard
                (#factory)(#(#args),*)
            }
        }

        #[automatically_derived]
        impl wirebox::Resolve<#registered> for #container {
            fn resolve() -> #registered {
                #container::#resolver()
            }
        }
    }
}

fn expand_factory(
    container: &Ident,
    directive: &RegistrationDirective,
    parameters: &[ParameterSpec],
    plain: &str,
) -> TokenStream {
    let registered = &directive.registered_type;
    let factory = &directive.factory;
    let resolver = resolver_ident(plain);
    let explicit = explicit_parameters(parameters);
    let args = invocation_args(directive.kind, container, parameters);
    let MockHooks {
        storage,
        setter,
        guard,
    } = mock::factory_hooks(container, plain, registered, &explicit);

    let names: Vec<&Ident> = explicit.iter().map(|(name, _)| *name).collect();
    let types: Vec<&Type> = explicit.iter().map(|(_, ty)| *ty).collect();

    let primary = quote! {
        impl #container {
            pub fn #resolver(#(#names: #types),*) -> #registered {
                #guard
                (#factory)(#(#args),*)
            }
        }
    };

    let convenience = convenience_impl(container, registered, &resolver, &names, &types);
    let objects = factory_objects(container, &resolver, &names, &types, plain, quote!(#registered));

    quote! {
        #storage

        #setter

        #primary

        #convenience

        #objects
    }
}

fn expand_singleton(
    container: &Ident,
    directive: &RegistrationDirective,
    parameters: &[ParameterSpec],
    plain: &str,
) -> TokenStream {
    let registered = &directive.registered_type;
    let factory = &directive.factory;
    let resolver = resolver_ident(plain);
    let holder = holder_ident(container, plain);
    let args = invocation_args(directive.kind, container, parameters);
    let MockHooks {
        storage,
        setter,
        guard,
    } = mock::singleton_hooks(container, plain, registered);

    quote! {
        #storage

        #setter

        static #holder: wirebox::SingletonCell<#registered> = wirebox::SingletonCell::new();

        impl #container {
            pub fn #resolver() -> #registered {
                #guard
                #holder.get_or_init(|| (#factory)(#(#args),*))
            }
        }

        #[automatically_derived]
        impl wirebox::Resolve<#registered> for #container {
            fn resolve() -> #registered {
                #container::#resolver()
            }
        }
    }
}

fn expand_opaque_auto(
    container: &Ident,
    directive: &RegistrationDirective,
    parameters: &[ParameterSpec],
    plain: &str,
) -> TokenStream {
    let factory = &directive.factory;
    let resolver = resolver_ident(plain);
    let output = opaque_return(&directive.registered_type);
    let args = invocation_args(directive.kind, container, parameters);

    quote! {
        impl #container {
            pub fn #resolver() -> #output {
                (#factory)(#(#args),*)
            }
        }
    }
}

fn expand_opaque_factory(
    container: &Ident,
    directive: &RegistrationDirective,
    parameters: &[ParameterSpec],
    plain: &str,
) -> TokenStream {
    let factory = &directive.factory;
    let resolver = resolver_ident(plain);
    let output = opaque_return(&directive.registered_type);
    let explicit = explicit_parameters(parameters);
    let args = invocation_args(directive.kind, container, parameters);

    let names: Vec<&Ident> = explicit.iter().map(|(name, _)| *name).collect();
    let types: Vec<&Type> = explicit.iter().map(|(_, ty)| *ty).collect();

    let primary = quote! {
        impl #container {
            pub fn #resolver(#(#names: #types),*) -> #output {
                (#factory)(#(#args),*)
            }
        }
    };

    let objects = factory_objects(container, &resolver, &names, &types, plain, output);

    quote! {
        #primary

        #objects
    }
}

fn expand_opaque_singleton(
    container: &Ident,
    directive: &RegistrationDirective,
    parameters: &[ParameterSpec],
    plain: &str,
) -> TokenStream {
    let factory = &directive.factory;
    let resolver = resolver_ident(plain);
    let holder = holder_ident(container, plain);
    let args = invocation_args(directive.kind, container, parameters);

    // A process-wide cell needs a nameable type, so the opaque singleton
    // erases to a shared handle; callers still cannot name the concrete
    // implementation.
    let (stored, init) = match opaque_bounds(&directive.registered_type) {
        Some(bounds) => (
            quote!(std::sync::Arc<dyn #bounds>),
            quote!(std::sync::Arc::new((#factory)(#(#args),*)) as std::sync::Arc<dyn #bounds>),
        ),
        None => {
            let registered = &directive.registered_type;
            (quote!(#registered), quote!((#factory)(#(#args),*)))
        }
    };

    quote! {
        static #holder: wirebox::SingletonCell<#stored> = wirebox::SingletonCell::new();

        impl #container {
            pub fn #resolver() -> #stored {
                #holder.get_or_init(|| #init)
            }
        }
    }
}

fn explicit_parameters(parameters: &[ParameterSpec]) -> Vec<(&Ident, &Type)> {
    parameters
        .iter()
        .filter(|parameter| parameter.classification == Classification::Explicit)
        .filter_map(|parameter| parameter.name.as_ref().map(|name| (name, &parameter.ty)))
        .collect()
}

// Builds the factory invocation argument list in source order: resolved
// entries become recursive resolver calls, explicit entries become the
// generated parameter bindings. The recursion form is kind-specific.
fn invocation_args(
    kind: DirectiveKind,
    container: &Ident,
    parameters: &[ParameterSpec],
) -> Vec<TokenStream> {
    parameters
        .iter()
        .map(|parameter| match parameter.classification {
            Classification::Explicit => {
                let name = parameter.name.as_ref().unwrap();
                quote!(#name)
            }
            Classification::Resolved => {
                let ty = &parameter.ty;
                match kind {
                    DirectiveKind::Auto | DirectiveKind::Singleton => {
                        quote!(<#container as wirebox::Resolve<_>>::resolve())
                    }
                    DirectiveKind::Factory
                    | DirectiveKind::OpaqueFactory
                    | DirectiveKind::OpaqueSingleton => {
                        quote!(<#container as wirebox::Resolve<#ty>>::resolve())
                    }
                    DirectiveKind::OpaqueAuto => {
                        quote!(<Self as wirebox::Resolve<#ty>>::resolve())
                    }
                }
            }
        })
        .collect()
}

// The convenience entry point forwards to the primary resolver so the mock
// interception fires uniformly for both: a Resolve impl when the directive
// has no explicit parameters, a ResolveWith impl otherwise.
fn convenience_impl(
    container: &Ident,
    registered: &Type,
    resolver: &Ident,
    names: &[&Ident],
    types: &[&Type],
) -> TokenStream {
    match types.len() {
        0 => quote! {
            #[automatically_derived]
            impl wirebox::Resolve<#registered> for #container {
                fn resolve() -> #registered {
                    #container::#resolver()
                }
            }
        },
        1 => {
            let ty = types[0];
            quote! {
                #[automatically_derived]
                impl wirebox::ResolveWith<#registered> for #container {
                    type Params = #ty;

                    fn resolve_with(params: Self::Params) -> #registered {
                        #container::#resolver(params)
                    }
                }
            }
        }
        _ => {
            let indices = (0..names.len()).map(syn::Index::from);
            quote! {
                #[automatically_derived]
                impl wirebox::ResolveWith<#registered> for #container {
                    type Params = (#(#types),*);

                    fn resolve_with(params: Self::Params) -> #registered {
                        #container::#resolver(#(params.#indices),*)
                    }
                }
            }
        }
    }
}

// Partial-application helpers. With explicit parameters: a non-constructible
// factory object plus a parameter-capturing thunk accessor. Without: the
// thunk accessor alone.
fn factory_objects(
    container: &Ident,
    resolver: &Ident,
    names: &[&Ident],
    types: &[&Type],
    plain: &str,
    output: TokenStream,
) -> TokenStream {
    let accessor = factory_accessor_ident(plain);

    if names.is_empty() {
        return quote! {
            impl #container {
                pub fn #accessor() -> wirebox::LazyFactory<#output> {
                    wirebox::LazyFactory::new(|| #container::#resolver())
                }
            }
        };
    }

    let factory_struct = factory_struct_ident(plain);
    let lazy = lazy_accessor_ident(plain);

    quote! {
        pub struct #factory_struct(());

        impl #factory_struct {
            pub fn make(&self, #(#names: #types),*) -> #output {
                #container::#resolver(#(#names),*)
            }
        }

        impl #container {
            pub fn #accessor() -> #factory_struct {
                #factory_struct(())
            }

            pub fn #lazy(#(#names: #types),*) -> wirebox::LazyFactory<#output> {
                wirebox::LazyFactory::new(move || #container::#resolver(#(#names.clone()),*))
            }
        }
    }
}

fn opaque_return(registered: &Type) -> TokenStream {
    match opaque_bounds(registered) {
        Some(bounds) => quote!(impl #bounds),
        None => quote!(#registered),
    }
}

fn opaque_bounds(ty: &Type) -> Option<&Punctuated<TypeParamBound, Token![+]>> {
    match ty {
        Type::Group(group) => opaque_bounds(&group.elem),
        Type::Paren(paren) => opaque_bounds(&paren.elem),
        Type::TraitObject(object) => Some(&object.bounds),
        _ => None,
    }
}
