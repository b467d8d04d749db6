use crate::{
    context::ValidationContext,
    error::ValidationError,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "propertyNames";

/// Each key is validated as a string value.
pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    if let JsonValue::Object(item) = instance {
        for key in item.keys() {
            validate_node(
                &ctx.descend().schema_step(KEYWORD).instance_step(key),
                value,
                &JsonValue::String(key.clone()),
            )?;
        }
    }
    Ok(())
}
