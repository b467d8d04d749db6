use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{number, JsonValue, Map},
};

const KEYWORD: &str = "multipleOf";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let divisor = helpers::number(ctx, KEYWORD, value)?;
    if divisor <= number::from_i64(0) {
        return Err(ctx.defect(KEYWORD, ValidationErrorKind::ZeroMultipleOf));
    }
    let Some(actual) = number::to_fraction(instance) else {
        return Ok(());
    };
    if number::is_multiple_of(&actual, &divisor) {
        Ok(())
    } else {
        Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::MultipleOf {
                instance: helpers::preview(instance),
                multiple_of: helpers::preview(value),
            },
        ))
    }
}
