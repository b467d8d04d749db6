use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

/// Length in characters, not bytes.
fn length(text: &str) -> u64 {
    bytecount::num_chars(text.as_bytes()) as u64
}

pub(crate) fn min_length<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::non_negative_integer(ctx, "minLength", value)?;
    if let JsonValue::String(item) = instance {
        if length(item) < limit {
            return Err(ctx.violation(
                "minLength",
                ValidationErrorKind::MinLength {
                    instance: helpers::preview(instance),
                    limit,
                },
            ));
        }
    }
    Ok(())
}

pub(crate) fn max_length<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = helpers::non_negative_integer(ctx, "maxLength", value)?;
    if let JsonValue::String(item) = instance {
        if length(item) > limit {
            return Err(ctx.violation(
                "maxLength",
                ValidationErrorKind::MaxLength {
                    instance: helpers::preview(instance),
                    limit,
                },
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    #[test_case("{'minLength': 2}", "'ab'")]
    #[test_case("{'minLength': 2}", "'日本'")]
    #[test_case("{'maxLength': 2}", "'日本'")]
    #[test_case("{'maxLength': 0}", "''")]
    #[test_case("{'minLength': 5}", "12")]
    fn valid(schema: &str, instance: &str) {
        tests_util::assert_valid(schema, instance);
    }

    #[test_case("{'minLength': 3}", "'日本'")]
    #[test_case("{'maxLength': 1}", "'日本'")]
    fn invalid(schema: &str, instance: &str) {
        tests_util::assert_violation(schema, instance);
    }

    #[test_case("{'minLength': -1}")]
    #[test_case("{'maxLength': 1.0}")]
    #[test_case("{'maxLength': '1'}")]
    fn defects(schema: &str) {
        // Constraint values are checked even for non-string instances.
        tests_util::assert_schema_defect(schema, "12");
    }

    #[test]
    fn messages() {
        tests_util::assert_message("{'minLength': 1}", "''", "\"\" is shorter than 1 character");
        tests_util::assert_message(
            "{'maxLength': 2}",
            "'abc'",
            "\"abc\" is longer than 2 characters",
        );
    }
}
