use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "dependentSchemas";

/// Each sub-schema applies to the whole instance when its key is present.
pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let dependencies = helpers::object(ctx, KEYWORD, value)?;
    if let JsonValue::Object(item) = instance {
        for (property, schema) in dependencies {
            if item.contains_key(property) {
                validate_node(
                    &ctx.descend().schema_step(KEYWORD).schema_step(property),
                    schema,
                    instance,
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use test_case::test_case;

    const SCHEMA: &str = "{'dependentSchemas': {'card': {'required': ['billing']}}}";

    #[test_case("{}")]
    #[test_case("{'card': 1, 'billing': 2}")]
    fn valid(instance: &str) {
        tests_util::assert_valid(SCHEMA, instance);
    }

    #[test]
    fn applies_to_the_whole_instance() {
        tests_util::assert_schema_path(SCHEMA, "{'card': 1}", "dependentSchemas.card.required");
    }

    #[test]
    fn defect() {
        tests_util::assert_schema_defect("{'dependentSchemas': {'card': true}}", "{'card': 1}");
    }
}
