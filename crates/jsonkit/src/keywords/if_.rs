use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

/// `if` never fails on its own: its outcome selects `then` or `else`.
pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let matched = helpers::probe(validate_node(
        &ctx.descend().schema_step("if"),
        value,
        instance,
    ))?;
    let branch = if matched { "then" } else { "else" };
    if let Some(schema) = parent.get(branch) {
        validate_node(&ctx.descend().schema_step(branch), schema, instance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    const SCHEMA: &str =
        "{'if': {'type': 'long'}, 'then': {'minimum': 0}, 'else': {'type': 'string'}}";

    #[test_case("5")]
    #[test_case("'x'")]
    fn valid(instance: &str) {
        tests_util::assert_valid(SCHEMA, instance);
    }

    #[test_case("-1", "then.minimum")]
    #[test_case("true", "else.type")]
    fn invalid(instance: &str, path: &str) {
        tests_util::assert_schema_path(SCHEMA, instance, path);
    }

    #[test]
    fn missing_branches() {
        tests_util::assert_valid("{'if': {'type': 'long'}}", "'x'");
        tests_util::assert_valid("{'if': {'type': 'long'}, 'then': {'minimum': 0}}", "'x'");
        // Without `if`, `then` and `else` are ignored.
        tests_util::assert_valid("{'then': {'type': 'long'}}", "'x'");
    }
}
