//! `minimum`, `maximum` and their exclusive variants.
//!
//! Operands are compared as exact fractions, so `0.1 + 0.2` style rounding never leaks in.
//! The draft-4 form, where `exclusiveMinimum: true` tightens a sibling `minimum`, is
//! accepted alongside the numeric form.
use core::cmp::Ordering;

use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{number, JsonValue, Map},
};

#[derive(Clone, Copy)]
enum Bound {
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
}

impl Bound {
    fn keyword(self) -> &'static str {
        match self {
            Bound::Minimum => "minimum",
            Bound::Maximum => "maximum",
            Bound::ExclusiveMinimum => "exclusiveMinimum",
            Bound::ExclusiveMaximum => "exclusiveMaximum",
        }
    }

    fn tightened(self) -> Self {
        match self {
            Bound::Minimum => Bound::ExclusiveMinimum,
            Bound::Maximum => Bound::ExclusiveMaximum,
            exclusive => exclusive,
        }
    }

    fn allows(self, ordering: Ordering) -> bool {
        match self {
            Bound::Minimum => ordering != Ordering::Less,
            Bound::Maximum => ordering != Ordering::Greater,
            Bound::ExclusiveMinimum => ordering == Ordering::Greater,
            Bound::ExclusiveMaximum => ordering == Ordering::Less,
        }
    }

    fn error(self, instance: String, limit: String) -> ValidationErrorKind {
        match self {
            Bound::Minimum => ValidationErrorKind::Minimum { instance, limit },
            Bound::Maximum => ValidationErrorKind::Maximum { instance, limit },
            Bound::ExclusiveMinimum => ValidationErrorKind::ExclusiveMinimum { instance, limit },
            Bound::ExclusiveMaximum => ValidationErrorKind::ExclusiveMaximum { instance, limit },
        }
    }
}

fn check(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    bound: Bound,
    value: &JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::number(ctx, keyword, value)?;
    let Some(actual) = number::to_fraction(instance) else {
        return Ok(());
    };
    match actual.partial_cmp(&limit) {
        Some(ordering) if bound.allows(ordering) => Ok(()),
        _ => Err(ctx.violation(
            keyword,
            bound.error(helpers::preview(instance), helpers::preview(value)),
        )),
    }
}

/// Whether a draft-4 boolean sibling turns `bound` exclusive.
fn is_tightened(
    ctx: &ValidationContext<'_>,
    parent: &Map,
    bound: Bound,
) -> Result<bool, ValidationError> {
    let sibling = bound.tightened().keyword();
    match parent.get(sibling) {
        Some(JsonValue::Boolean(flag)) => Ok(*flag),
        Some(other) if other.is_number() => Ok(false),
        Some(_) => Err(helpers::invalid_constraint(
            ctx,
            sibling,
            "a number or a boolean",
            None,
        )),
        None => Ok(false),
    }
}

fn inclusive(
    ctx: &ValidationContext<'_>,
    parent: &Map,
    bound: Bound,
    value: &JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let effective = if is_tightened(ctx, parent, bound)? {
        bound.tightened()
    } else {
        bound
    };
    check(ctx, bound.keyword(), effective, value, instance)
}

fn exclusive(
    ctx: &ValidationContext<'_>,
    parent: &Map,
    bound: Bound,
    sibling: &'static str,
    value: &JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    if let JsonValue::Boolean(_) = value {
        // Applied by the sibling.
        return if parent.contains_key(sibling) {
            Ok(())
        } else {
            Err(ctx.defect(
                bound.keyword(),
                ValidationErrorKind::MissingSibling { sibling },
            ))
        };
    }
    check(ctx, bound.keyword(), bound, value, instance)
}

pub(crate) fn minimum<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    inclusive(ctx, parent, Bound::Minimum, value, instance)
}

pub(crate) fn maximum<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    inclusive(ctx, parent, Bound::Maximum, value, instance)
}

pub(crate) fn exclusive_minimum<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    exclusive(ctx, parent, Bound::ExclusiveMinimum, "minimum", value, instance)
}

pub(crate) fn exclusive_maximum<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    exclusive(ctx, parent, Bound::ExclusiveMaximum, "maximum", value, instance)
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    #[test_case("{'minimum': 5}", "5")]
    #[test_case("{'minimum': 5}", "5.0")]
    #[test_case("{'minimum': 0.3}", "0.30000000000000004")]
    #[test_case("{'maximum': 1.5}", "1")]
    #[test_case("{'exclusiveMinimum': 1}", "1.1")]
    #[test_case("{'exclusiveMaximum': 1}", "0")]
    #[test_case("{'minimum': 5, 'exclusiveMinimum': false}", "5")]
    #[test_case("{'minimum': 9223372036854775807}", "9223372036854775807")]
    #[test_case("{'minimum': 5}", "'not a number'")]
    fn valid(schema: &str, instance: &str) {
        tests_util::assert_valid(schema, instance);
    }

    #[test_case("{'minimum': 5}", "4.999")]
    #[test_case("{'maximum': 0.1}", "0.10000001")]
    #[test_case("{'exclusiveMinimum': 1}", "1.0")]
    #[test_case("{'exclusiveMaximum': 1}", "1")]
    #[test_case("{'minimum': 5, 'exclusiveMinimum': true}", "5")]
    #[test_case("{'maximum': 5, 'exclusiveMaximum': true}", "5.0")]
    #[test_case("{'maximum': -9223372036854775808}", "-9223372036854775807")]
    fn invalid(schema: &str, instance: &str) {
        tests_util::assert_violation(schema, instance);
    }

    #[test_case("{'minimum': '5'}")]
    #[test_case("{'exclusiveMinimum': true}")]
    #[test_case("{'maximum': 5, 'exclusiveMaximum': 'yes'}")]
    fn defects(schema: &str) {
        tests_util::assert_schema_defect(schema, "1");
    }

    #[test]
    fn messages() {
        tests_util::assert_message("{'minimum': 5}", "4", "4 is less than the minimum of 5");
        tests_util::assert_message(
            "{'exclusiveMaximum': 2.5}",
            "2.5",
            "2.5 is greater than or equal to the maximum of 2.5",
        );
        tests_util::assert_message(
            "{'minimum': 5, 'exclusiveMinimum': true}",
            "5",
            "5 is less than or equal to the minimum of 5",
        );
    }
}
