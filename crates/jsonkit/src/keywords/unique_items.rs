use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "uniqueItems";

/// Pairwise structural comparison. Values are not hashable, so this is quadratic.
fn is_unique(items: &[JsonValue]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(idx, item)| items[idx + 1..].iter().all(|other| other != item))
}

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    if !helpers::boolean(ctx, KEYWORD, value)? {
        return Ok(());
    }
    match instance {
        JsonValue::Array(items) if !is_unique(items) => Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::UniqueItems {
                instance: helpers::preview(instance),
            },
        )),
        _ => Ok(()),
    }
}
