use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "allOf";

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
        validate_node(
            &ctx.descend().schema_step(KEYWORD).schema_step(idx),
            schema,
            instance,
        )?;
    }
    Ok(())
}
