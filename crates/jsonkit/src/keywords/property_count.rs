use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

pub(crate) fn min_properties<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::non_negative_integer(ctx, "minProperties", value)?;
    match instance {
        JsonValue::Object(item) if (item.len() as u64) < limit => Err(ctx.violation(
            "minProperties",
            ValidationErrorKind::MinProperties {
                instance: helpers::preview(instance),
                limit,
            },
        )),
        _ => Ok(()),
    }
}

pub(crate) fn max_properties<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::non_negative_integer(ctx, "maxProperties", value)?;
    match instance {
        JsonValue::Object(item) if (item.len() as u64) > limit => Err(ctx.violation(
            "maxProperties",
            ValidationErrorKind::MaxProperties {
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

    #[test_case("{'minProperties': 1}", "{'a': 1}")]
    #[test_case("{'maxProperties': 1}", "{'a': 1}")]
    #[test_case("{'minProperties': 3}", "[1]")]
    fn valid(schema: &str, instance: &str) {
        tests_util::assert_valid(schema, instance);
    }

    #[test]
    fn messages() {
        tests_util::assert_message(
            "{'minProperties': 1}",
            "{}",
            "{} has less than 1 property",
        );
        tests_util::assert_message(
            "{'maxProperties': 1}",
            "{'a': 1, 'b': [1, 2]}",
            "{\"a\":1,\"b\":<2>} has more than 1 property",
        );
    }

    #[test]
    fn defect() {
        tests_util::assert_schema_defect("{'maxProperties': -3}", "{}");
    }
}
