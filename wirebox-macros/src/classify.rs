//! Normalization of raw parameter entries into classified parameter specs.
//!
//! Plain-shape entries are bulk-classified by directive kind: factory kinds
//! expose them to the caller, auto and singleton kinds resolve them
//! recursively. Tagged entries carry their own classification. Explicit
//! parameters keep the author-supplied name when one was written at the
//! registration site; the rest receive dense `arg0..argN` numbering over the
//! unnamed-explicit subsequence, regardless of how many resolved entries are
//! interleaved.

use crate::directive::{RawParameter, RegistrationDirective};
use itertools::Itertools;
use proc_macro2::{Ident, Span};
use syn::spanned::Spanned;
use syn::{Result, Type};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Classification {
    Resolved,
    Explicit,
}

/// One classified factory input. `name` is the generated parameter binding
/// and is present exactly for explicit parameters.
#[derive(Debug)]
pub struct ParameterSpec {
    pub ty: Type,
    pub classification: Classification,
    pub name: Option<Ident>,
}

pub fn classify(directive: &RegistrationDirective) -> Result<Vec<ParameterSpec>> {
    let mut synthetic_index = 0usize;

    directive
        .parameters
        .iter()
        .map(|parameter| -> Result<ParameterSpec> {
            let (classification, name) = match parameter {
                RawParameter::Plain(_) => {
                    if directive.kind.is_factory() {
                        (Classification::Explicit, None)
                    } else {
                        (Classification::Resolved, None)
                    }
                }
                RawParameter::Tagged { resolved: true, .. } => (Classification::Resolved, None),
                RawParameter::Tagged {
                    resolved: false,
                    name,
                    ..
                } => (Classification::Explicit, name.clone()),
            };

            if classification == Classification::Explicit && !directive.kind.is_factory() {
                return Err(syn::Error::new(
                    parameter.ty().span(),
                    "explicit parameters require a factory registration directive",
                ));
            }

            let name = match classification {
                Classification::Resolved => None,
                Classification::Explicit => Some(name.unwrap_or_else(|| {
                    let synthetic =
                        Ident::new(&format!("arg{synthetic_index}"), Span::call_site());
                    synthetic_index += 1;
                    synthetic
                })),
            };

            Ok(ParameterSpec {
                ty: parameter.ty().clone(),
                classification,
                name,
            })
        })
        .try_collect()
}
