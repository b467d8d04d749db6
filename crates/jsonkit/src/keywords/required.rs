use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "required";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let required = helpers::string_list(ctx, KEYWORD, value)?;
    if required.is_empty() {
        return Err(helpers::invalid_constraint(
            ctx,
            KEYWORD,
            "a non-empty array of distinct strings",
            None,
        ));
    }
    if let JsonValue::Object(item) = instance {
        if let Some(missing) = required.iter().find(|name| !item.contains_key(**name)) {
            return Err(ctx.violation(
                KEYWORD,
                ValidationErrorKind::Required {
                    property: (*missing).to_string(),
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

    #[test_case("{'a': 1, 'b': 2}")]
    #[test_case("['a', 'b']"; "ignores non-objects")]
    fn valid(instance: &str) {
        tests_util::assert_valid("{'required': ['a', 'b']}", instance);
    }

    #[test]
    fn names_the_first_missing_property() {
        tests_util::assert_message(
            "{'required': ['a', 'b']}",
            "{'a': 1}",
            "\"b\" is a required property",
        );
    }

    #[test_case("{'required': []}")]
    #[test_case("{'required': 'a'}")]
    #[test_case("{'required': ['a', 1]}")]
    #[test_case("{'required': ['a', 'a']}")]
    fn defects(schema: &str) {
        tests_util::assert_schema_defect(schema, "{}");
    }
}
