//! `contains` with its `minContains` / `maxContains` companions.
//!
//! When `minContains` is present it replaces the implicit "at least one" of `contains`,
//! so `minContains: 0` accepts arrays without any match.
use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

fn count_matches<'s>(
    ctx: &ValidationContext<'s>,
    schema: &'s JsonValue,
    elements: &[JsonValue],
) -> Result<u64, ValidationError> {
    let mut found = 0;
    for (idx, element) in elements.iter().enumerate() {
        let branch = ctx.descend().schema_step("contains").instance_step(idx);
        if helpers::probe(validate_node(&branch, schema, element))? {
            found += 1;
        }
    }
    Ok(found)
}

fn sibling<'s>(
    ctx: &ValidationContext<'_>,
    parent: &'s Map,
    keyword: &str,
) -> Result<&'s JsonValue, ValidationError> {
    parent.get("contains").ok_or_else(|| {
        ctx.defect(
            keyword,
            ValidationErrorKind::MissingSibling {
                sibling: "contains",
            },
        )
    })
}

/// Count matches once and apply `contains`, `minContains` and `maxContains` together.
pub(crate) fn contains<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let min = parent
        .get("minContains")
        .map(|limit| helpers::non_negative_integer(ctx, "minContains", limit))
        .transpose()?;
    let max = parent
        .get("maxContains")
        .map(|limit| helpers::non_negative_integer(ctx, "maxContains", limit))
        .transpose()?;
    let JsonValue::Array(elements) = instance else {
        return Ok(());
    };
    let found = count_matches(ctx, value, elements)?;
    match min {
        None if found == 0 => {
            return Err(ctx.violation(
                "contains",
                ValidationErrorKind::Contains {
                    instance: helpers::preview(instance),
                },
            ));
        }
        Some(limit) if found < limit => {
            return Err(ctx.violation(
                "minContains",
                ValidationErrorKind::MinContains {
                    instance: helpers::preview(instance),
                    limit,
                    found,
                },
            ));
        }
        _ => {}
    }
    match max {
        Some(limit) if found > limit => Err(ctx.violation(
            "maxContains",
            ValidationErrorKind::MaxContains {
                instance: helpers::preview(instance),
                limit,
                found,
            },
        )),
        _ => Ok(()),
    }
}

/// The bound itself; counting happens under `contains`.
pub(crate) fn min_contains<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    _instance: &JsonValue,
) -> Result<(), ValidationError> {
    helpers::non_negative_integer(ctx, "minContains", value)?;
    sibling(ctx, parent, "minContains").map(|_| ())
}

pub(crate) fn max_contains<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    _instance: &JsonValue,
) -> Result<(), ValidationError> {
    helpers::non_negative_integer(ctx, "maxContains", value)?;
    sibling(ctx, parent, "maxContains").map(|_| ())
}
