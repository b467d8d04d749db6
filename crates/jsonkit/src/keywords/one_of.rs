use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "oneOf";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let mut matched = 0usize;
    for (idx, schema) in helpers::schema_array(ctx, KEYWORD, value)?
        .iter()
        .enumerate()
    {
        let branch = ctx.descend().schema_step(KEYWORD).schema_step(idx);
        if helpers::probe(validate_node(&branch, schema, instance))? {
            matched += 1;
            if matched > 1 {
                return Err(ctx.violation(
                    KEYWORD,
                    ValidationErrorKind::OneOfMultipleValid {
                        instance: helpers::preview(instance),
                    },
                ));
            }
        }
    }
    if matched == 1 {
        Ok(())
    } else {
        Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::OneOfNotValid {
                instance: helpers::preview(instance),
            },
        ))
    }
}
