use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "enum";

/// Structural equality against each option. `1` and `1.0` are different values.
pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let options = match value {
        JsonValue::Array(options) if !options.is_empty() => options,
        other => {
            return Err(helpers::invalid_constraint(
                ctx,
                KEYWORD,
                "a non-empty array",
                Some(format!("found {}", other.render_to_depth(0))),
            ))
        }
    };
    if options.iter().any(|option| option == instance) {
        Ok(())
    } else {
        Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::Enum {
                instance: helpers::preview(instance),
                options: helpers::preview(value),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    #[test_case("1")]
    #[test_case("'a'")]
    #[test_case("{'b': [true]}")]
    fn valid(instance: &str) {
        tests_util::assert_valid("{'enum': [1, 'a', {'b': [TRUE]}]}", instance);
    }

    #[test_case("1.0")]
    #[test_case("'A'")]
    #[test_case("{'b': [false]}")]
    fn invalid(instance: &str) {
        tests_util::assert_violation("{'enum': [1, 'a', {'b': [TRUE]}]}", instance);
    }

    #[test_case("{'enum': []}")]
    #[test_case("{'enum': 1}")]
    fn defects(schema: &str) {
        tests_util::assert_schema_defect(schema, "1");
    }

    #[test]
    fn message() {
        tests_util::assert_message("{'enum': [1, 2]}", "3", "3 is not one of [1,2]");
    }
}
