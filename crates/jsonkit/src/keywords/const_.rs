use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    if value == instance {
        Ok(())
    } else {
        Err(ctx.violation(
            "const",
            ValidationErrorKind::Constant {
                instance: helpers::preview(instance),
                expected: helpers::preview(value),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    #[test_case("{'const': 1}", "1")]
    #[test_case("{'const': 'x'}", "\"x\"")]
    #[test_case("{'const': {'a': [1, 2], 'b': true}}", "{'b': true, 'a': [1, 2]}")]
    fn valid(schema: &str, instance: &str) {
        tests_util::assert_valid(schema, instance);
    }

    #[test_case("{'const': 1}", "1.0")]
    #[test_case("{'const': [1, 2]}", "[2, 1]")]
    #[test_case("{'const': {'a': 1}}", "{'a': 1, 'b': 2}")]
    fn invalid(schema: &str, instance: &str) {
        tests_util::assert_violation(schema, instance);
    }

    #[test]
    fn message() {
        tests_util::assert_message("{'const': 2}", "1", "2 was expected, found 1");
    }
}
