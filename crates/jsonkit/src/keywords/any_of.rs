use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "anyOf";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    for (idx, schema) in helpers::schema_array(ctx, KEYWORD, value)?
        .iter()
        .enumerate()
    {
        let branch = ctx.descend().schema_step(KEYWORD).schema_step(idx);
        if helpers::probe(validate_node(&branch, schema, instance))? {
            return Ok(());
        }
    }
    Err(ctx.violation(
        KEYWORD,
        ValidationErrorKind::AnyOf {
            instance: helpers::preview(instance),
        },
    ))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    const SCHEMA: &str = "{'anyOf': [{'type': 'string'}, {'minimum': 10}]}";

    #[test_case("'x'")]
    #[test_case("11")]
    #[test_case("[]")]
    fn valid(instance: &str) {
        tests_util::assert_valid(SCHEMA, instance);
    }

    #[test]
    fn invalid() {
        tests_util::assert_message(
            SCHEMA,
            "3",
            "3 is not valid under any of the schemas listed in the 'anyOf' keyword",
        );
        tests_util::assert_schema_path(SCHEMA, "3", "anyOf");
    }

    #[test]
    fn defects_in_branches_are_not_swallowed() {
        tests_util::assert_schema_defect("{'anyOf': [{'minItems': -1}, {}]}", "[]");
    }
}
