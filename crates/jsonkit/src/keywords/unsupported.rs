//! Keywords whose presence makes a schema unusable.
//!
//! These are rejected for the whole fragment before any keyword runs, so the fault does not
//! depend on where they sit among their siblings.
use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    value::Map,
};

const UNSUPPORTED: [&str; 2] = ["unevaluatedItems", "unevaluatedProperties"];

/// Fail if `fragment` carries any keyword that cannot be evaluated.
pub(crate) fn reject(ctx: &ValidationContext<'_>, fragment: &Map) -> Result<(), ValidationError> {
    match UNSUPPORTED
        .iter()
        .find(|keyword| fragment.contains_key(**keyword))
    {
        Some(keyword) => Err(ctx.defect(keyword, ValidationErrorKind::Unsupported)),
        None => Ok(()),
    }
}
