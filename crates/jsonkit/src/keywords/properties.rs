use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "properties";

/// Only properties present on the instance are checked.
pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let properties = helpers::object(ctx, KEYWORD, value)?;
    if let JsonValue::Object(item) = instance {
        for (name, schema) in properties {
            if let Some(property) = item.get(name) {
                validate_node(
                    &ctx.descend()
                        .schema_step(KEYWORD)
                        .schema_step(name)
                        .instance_step(name),
                    schema,
                    property,
                )?;
            }
        }
    }
    Ok(())
}
