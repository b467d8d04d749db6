use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "not";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    if helpers::probe(validate_node(
        &ctx.descend().schema_step(KEYWORD),
        value,
        instance,
    ))? {
        Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::Not {
                instance: helpers::preview(instance),
                schema: helpers::preview(value),
            },
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;

    #[test]
    fn negation() {
        let schema = "{'not': {'type': 'string'}}";
        tests_util::assert_valid(schema, "1");
        tests_util::assert_message(schema, "'a'", "{\"type\":\"string\"} is not allowed for \"a\"");
    }

    #[test]
    fn operand_must_be_a_schema() {
        tests_util::assert_schema_defect("{'not': 'string'}", "1");
        tests_util::assert_schema_defect("{'not': {'maxLength': 'x'}}", "1");
    }
}
