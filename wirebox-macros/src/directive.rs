//! Parsing of a directive's raw argument list into the typed intermediate
//! representation consumed by the classifier and the expanders.
//!
//! All registration attributes share one argument-list contract: the first
//! argument is the registered type, the last is the factory expression, and
//! everything in between is a parameter entry — either a bare type or a
//! `resolved(Type)` / `explicit(name: Type)` tagged entry.

use crate::error::ExpansionError;
use proc_macro2::Span;
use quote::quote;
use syn::parse::discouraged::Speculative;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parenthesized, token, Expr, Ident, PathArguments, Result, Token, Type};

/// The directive kinds of the registration surface.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum DirectiveKind {
    Auto,
    Factory,
    Singleton,
    OpaqueAuto,
    OpaqueFactory,
    OpaqueSingleton,
}

impl DirectiveKind {
    /// Factory-style kinds expose explicit parameters and partial-application
    /// factory objects.
    pub fn is_factory(self) -> bool {
        matches!(self, DirectiveKind::Factory | DirectiveKind::OpaqueFactory)
    }
}

/// One raw argument, before positional interpretation.
pub enum RawArg {
    /// `resolved(Type)` or `explicit(name: Type)`.
    Tagged {
        tag: Ident,
        name: Option<Ident>,
        ty: Type,
    },
    /// A bare type expression.
    Type(Type),
    /// Anything else; only valid in the factory position.
    Expr(Expr),
}

impl Parse for RawArg {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Ident) && input.peek2(token::Paren) {
            let fork = input.fork();
            let tag: Ident = fork.parse()?;
            if tag == "resolved" || tag == "explicit" {
                let content;
                parenthesized!(content in fork);
                let name = if content.peek(Ident)
                    && content.peek2(Token![:])
                    && !content.peek2(Token![::])
                {
                    let name: Ident = content.parse()?;
                    content.parse::<Token![:]>()?;
                    Some(name)
                } else {
                    None
                };
                let ty: Type = content.parse()?;
                if !content.is_empty() {
                    return Err(content.error("unexpected tokens in parameter entry"));
                }
                input.advance_to(&fork);
                return Ok(RawArg::Tagged { tag, name, ty });
            }
        }

        let fork = input.fork();
        if let Ok(ty) = fork.parse::<Type>() {
            if fork.is_empty() || fork.peek(Token![,]) {
                input.advance_to(&fork);
                return Ok(RawArg::Type(ty));
            }
        }

        input.parse().map(RawArg::Expr)
    }
}

/// The order-preserving raw argument list of one directive.
pub struct DirectiveArgs {
    pub args: Punctuated<RawArg, Token![,]>,
}

impl Parse for DirectiveArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            args: Punctuated::parse_terminated(input)?,
        })
    }
}

/// One parameter entry, still carrying its argument-list shape.
#[derive(Debug)]
pub enum RawParameter {
    Plain(Type),
    Tagged {
        resolved: bool,
        name: Option<Ident>,
        ty: Type,
    },
}

impl RawParameter {
    pub fn ty(&self) -> &Type {
        match self {
            RawParameter::Plain(ty) => ty,
            RawParameter::Tagged { ty, .. } => ty,
        }
    }
}

/// One declarative registration site: the typed form of a directive's
/// arguments. Constructed once per attribute occurrence, immutable, and
/// discarded after expansion.
#[derive(Debug)]
pub struct RegistrationDirective {
    pub kind: DirectiveKind,
    pub registered_type: Type,
    pub parameters: Vec<RawParameter>,
    pub factory: Expr,
}

impl RegistrationDirective {
    pub fn from_args(kind: DirectiveKind, args: DirectiveArgs) -> Result<Self> {
        let mut args: Vec<RawArg> = args.args.into_iter().collect();
        if args.len() < 2 {
            return Err(ExpansionError::MissingArguments.into_syn(Span::call_site()));
        }

        let factory = match args.pop() {
            Some(RawArg::Expr(expr)) => expr,
            // A path factory parses as a type; reinterpret its tokens.
            Some(RawArg::Type(ty)) => syn::parse2::<Expr>(quote!(#ty))
                .map_err(|_| ExpansionError::MissingFactory.into_syn(ty.span()))?,
            Some(RawArg::Tagged { tag, .. }) => {
                return Err(ExpansionError::MissingFactory.into_syn(tag.span()));
            }
            None => unreachable!(),
        };

        let mut args = args.into_iter();
        let registered_type = match args.next() {
            Some(RawArg::Type(ty)) => ty,
            Some(RawArg::Expr(expr)) => {
                return Err(ExpansionError::MissingReturnType.into_syn(expr.span()));
            }
            Some(RawArg::Tagged { tag, .. }) => {
                return Err(ExpansionError::MissingReturnType.into_syn(tag.span()));
            }
            None => unreachable!(),
        };

        let parameters = args
            .map(|arg| match arg {
                RawArg::Type(ty) => {
                    if let Some(tag) = classification_shaped(&ty) {
                        Err(ExpansionError::UnknownClassification(tag.to_string())
                            .into_syn(ty.span()))
                    } else {
                        Ok(RawParameter::Plain(ty))
                    }
                }
                RawArg::Tagged { tag, name, ty } => Ok(RawParameter::Tagged {
                    resolved: tag == "resolved",
                    name,
                    ty,
                }),
                RawArg::Expr(expr) => {
                    if let Some(tag) = expr_classification_shaped(&expr) {
                        Err(ExpansionError::UnknownClassification(tag).into_syn(expr.span()))
                    } else {
                        Err(
                            ExpansionError::UnsupportedType(quote!(#expr).to_string())
                                .into_syn(expr.span()),
                        )
                    }
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            kind,
            registered_type,
            parameters,
            factory,
        })
    }
}

// A bare `tag(Type)` entry parses as a path type with parenthesized
// arguments (the `Fn(..)` sugar). In parameter position that shape is a
// classification attempt with a case name this engine does not know.
fn classification_shaped(ty: &Type) -> Option<&Ident> {
    if let Type::Path(path) = ty {
        if path.qself.is_none() && path.path.segments.len() == 1 {
            let segment = path.path.segments.first()?;
            if matches!(segment.arguments, PathArguments::Parenthesized(_)) {
                return Some(&segment.ident);
            }
        }
    }

    None
}

fn expr_classification_shaped(expr: &Expr) -> Option<String> {
    if let Expr::Call(call) = expr {
        if let Expr::Path(path) = call.func.as_ref() {
            return path.path.get_ident().map(Ident::to_string);
        }
    }

    None
}
