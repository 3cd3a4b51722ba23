//! Identifier synthesis for generated declarations.
//!
//! Every secondary identifier a directive emits (resolver functions, mock
//! setters, storage statics, factory structs) is derived from the *plain
//! name* of the registered type: the bare trait or type identifier left after
//! stripping smart-pointer wrappers, `dyn`/`impl` qualifiers, references and
//! grouping. Types with no single recoverable identifier (multi-element
//! tuples, multi-argument generics) have no plain name, which blocks any
//! directive kind that needs secondary identifiers.

use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span};
use syn::{GenericArgument, Item, PathArguments, Type, TypeParamBound};

/// Derives the canonical plain name of a registered or parameter type.
pub fn plain_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Group(group) => plain_type_name(&group.elem),
        Type::Paren(paren) => plain_type_name(&paren.elem),
        Type::Reference(reference) => plain_type_name(&reference.elem),
        Type::Tuple(tuple) if tuple.elems.len() == 1 => plain_type_name(&tuple.elems[0]),
        Type::TraitObject(object) => bound_name(object.bounds.iter()),
        Type::ImplTrait(opaque) => bound_name(opaque.bounds.iter()),
        Type::Path(path) => {
            let segment = path.path.segments.last()?;
            match &segment.arguments {
                PathArguments::None => Some(segment.ident.to_string()),
                PathArguments::AngleBracketed(arguments) => {
                    let mut types = arguments.args.iter().filter_map(|argument| {
                        if let GenericArgument::Type(inner) = argument {
                            Some(inner)
                        } else {
                            None
                        }
                    });
                    // A single type argument is a wrapper (Arc<dyn T>, Box<T>);
                    // anything wider has no single recoverable identifier.
                    match (types.next(), types.next()) {
                        (Some(inner), None) => plain_type_name(inner),
                        _ => None,
                    }
                }
                PathArguments::Parenthesized(_) => None,
            }
        }
        _ => None,
    }
}

fn bound_name<'a>(bounds: impl Iterator<Item = &'a TypeParamBound>) -> Option<String> {
    bounds
        .filter_map(|bound| {
            if let TypeParamBound::Trait(bound) = bound {
                bound.path.segments.last()
            } else {
                None
            }
        })
        .map(|segment| segment.ident.to_string())
        .find(|name| name != "Send" && name != "Sync" && name != "Unpin")
}

/// Derives the container name from the declaration a directive is attached
/// to: the ident of a named struct/enum, or the self type of an impl block.
/// Generic containers are rejected since generated impls carry no parameters.
pub fn container_ident(item: &Item) -> Option<Ident> {
    match item {
        Item::Struct(item) if item.generics.params.is_empty() => Some(item.ident.clone()),
        Item::Enum(item) if item.generics.params.is_empty() => Some(item.ident.clone()),
        Item::Impl(item) if item.generics.params.is_empty() && item.trait_.is_none() => {
            plain_type_name(&item.self_ty).map(|name| Ident::new(&name, Span::call_site()))
        }
        _ => None,
    }
}

pub fn resolver_ident(plain: &str) -> Ident {
    snake_ident("resolve", plain)
}

pub fn mock_setter_ident(plain: &str) -> Ident {
    snake_ident("mock", plain)
}

pub fn factory_accessor_ident(plain: &str) -> Ident {
    snake_ident("factory_of", plain)
}

pub fn lazy_accessor_ident(plain: &str) -> Ident {
    snake_ident("lazy", plain)
}

pub fn factory_struct_ident(plain: &str) -> Ident {
    Ident::new(&format!("{plain}Factory"), Span::call_site())
}

pub fn holder_ident(container: &Ident, plain: &str) -> Ident {
    qualified_static(container, plain, "HOLDER")
}

pub fn mock_holder_ident(container: &Ident, plain: &str) -> Ident {
    qualified_static(container, plain, "MOCK_HOLDER")
}

fn snake_ident(prefix: &str, plain: &str) -> Ident {
    Ident::new(
        &format!("{prefix}_{}", plain.to_case(Case::Snake)),
        Span::call_site(),
    )
}

// Storage statics live at module level, so they are qualified per container
// to keep two containers registering the same type apart.
fn qualified_static(container: &Ident, plain: &str, suffix: &str) -> Ident {
    Ident::new(
        &format!(
            "{}_{}_{suffix}",
            container.to_string().to_case(Case::Snake).to_uppercase(),
            plain.to_case(Case::Snake).to_uppercase(),
        ),
        Span::call_site(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn plain_name_of_bare_path() {
        let ty: Type = parse_quote!(Theme);
        assert_eq!(plain_type_name(&ty).as_deref(), Some("Theme"));
    }

    #[test]
    fn plain_name_strips_pointer_and_dyn() {
        let ty: Type = parse_quote!(Arc<dyn UserSession>);
        assert_eq!(plain_type_name(&ty).as_deref(), Some("UserSession"));
    }

    #[test]
    fn plain_name_skips_marker_bounds() {
        let ty: Type = parse_quote!(dyn Cache + Send + Sync);
        assert_eq!(plain_type_name(&ty).as_deref(), Some("Cache"));
    }

    #[test]
    fn plain_name_unwraps_grouping() {
        let ty: Type = parse_quote!((Box<dyn Notifier>,));
        assert_eq!(plain_type_name(&ty).as_deref(), Some("Notifier"));
    }

    #[test]
    fn plain_name_takes_last_path_segment() {
        let ty: Type = parse_quote!(session::UserSession);
        assert_eq!(plain_type_name(&ty).as_deref(), Some("UserSession"));
    }

    #[test]
    fn no_plain_name_for_wide_generics_or_tuples() {
        let map: Type = parse_quote!(HashMap<String, String>);
        let pair: Type = parse_quote!((i64, String));
        assert_eq!(plain_type_name(&map), None);
        assert_eq!(plain_type_name(&pair), None);
    }

    #[test]
    fn container_from_struct_and_impl() {
        let item: Item = parse_quote!(
            struct Dependencies;
        );
        assert_eq!(container_ident(&item).unwrap(), "Dependencies");

        let item: Item = parse_quote!(
            impl Dependencies {}
        );
        assert_eq!(container_ident(&item).unwrap(), "Dependencies");
    }

    #[test]
    fn no_container_for_generic_declarations() {
        let item: Item = parse_quote!(
            struct Dependencies<T>(T);
        );
        assert_eq!(container_ident(&item), None);
    }

    #[test]
    fn derived_identifiers() {
        let container = Ident::new("Dependencies", Span::call_site());
        assert_eq!(resolver_ident("UserSession"), "resolve_user_session");
        assert_eq!(mock_setter_ident("UserSession"), "mock_user_session");
        assert_eq!(factory_struct_ident("UserSession"), "UserSessionFactory");
        assert_eq!(
            holder_ident(&container, "UserSession"),
            "DEPENDENCIES_USER_SESSION_HOLDER"
        );
        assert_eq!(
            mock_holder_ident(&container, "UserSession"),
            "DEPENDENCIES_USER_SESSION_MOCK_HOLDER"
        );
    }
}
