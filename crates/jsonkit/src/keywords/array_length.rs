use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

pub(crate) fn min_items<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::non_negative_integer(ctx, "minItems", value)?;
    match instance {
        JsonValue::Array(items) if (items.len() as u64) < limit => Err(ctx.violation(
            "minItems",
            ValidationErrorKind::MinItems {
                instance: helpers::preview(instance),
                limit,
            },
        )),
        _ => Ok(()),
    }
}

pub(crate) fn max_items<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::non_negative_integer(ctx, "maxItems", value)?;
    match instance {
        JsonValue::Array(items) if (items.len() as u64) > limit => Err(ctx.violation(
            "maxItems",
            ValidationErrorKind::MaxItems {
                instance: helpers::preview(instance),
                limit,
            },
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    #[test_case("{'minItems': 2}", "[1, 2]")]
    #[test_case("{'minItems': 2}", "'ab'")]
    #[test_case("{'maxItems': 0}", "[]")]
    fn valid(schema: &str, instance: &str) {
        tests_util::assert_valid(schema, instance);
    }

    #[test]
    fn messages() {
        tests_util::assert_message("{'minItems': 2}", "[1]", "[1] has less than 2 items");
        tests_util::assert_message("{'maxItems': 1}", "[1, 2]", "[1,2] has more than 1 item");
        tests_util::assert_schema_path("{'minItems': 1}", "[]", "minItems");
    }

    #[test_case("{'minItems': -1}")]
    #[test_case("{'maxItems': 2.5}")]
    #[test_case("{'maxItems': [2]}")]
    fn defects(schema: &str) {
        tests_util::assert_schema_defect(schema, "[]");
    }
}
