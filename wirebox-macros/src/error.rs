use proc_macro2::Span;
use thiserror::Error;

/// Failures raised while expanding a registration directive. Every failure is
/// local to the directive it occurred in: the decorated item is re-emitted
/// untouched and only the directive's resolvers are missing.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum ExpansionError {
    #[error(
        "registration directives must be attached to a named type or an impl block of a named type"
    )]
    InvalidDeclaration,
    #[error("expected a registered type and a factory expression")]
    MissingArguments,
    #[error("expected the registered type as the first argument")]
    MissingReturnType,
    #[error("expected a factory expression as the last argument")]
    MissingFactory,
    #[error("cannot derive a plain type name for `{0}`")]
    UnsupportedType(String),
    #[error("unknown parameter classification `{0}`; expected `resolved` or `explicit`")]
    UnknownClassification(String),
}

impl ExpansionError {
    pub fn into_syn(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}
