use std::sync::Arc;

use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    regex::RegexEngine,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "pattern";

/// Compile a schema-side pattern once per validator. An invalid expression is a schema defect.
pub(crate) fn compile_pattern(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    pattern: &str,
) -> Result<Arc<dyn RegexEngine>, ValidationError> {
    ctx.pattern(pattern).map_err(|cause| {
        ctx.defect(
            keyword,
            ValidationErrorKind::InvalidRegex {
                pattern: pattern.to_string(),
                cause,
            },
        )
    })
}

/// Search `text`, reporting an engine that gives up as a failure of the instance.
pub(crate) fn search(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    regex: &dyn RegexEngine,
    text: &str,
) -> Result<bool, ValidationError> {
    regex.is_match(text).map_err(|cause| {
        ctx.violation(
            keyword,
            ValidationErrorKind::BacktrackLimitExceeded {
                instance: format!("\"{text}\""),
                cause,
            },
        )
    })
}

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let pattern = helpers::string(ctx, KEYWORD, value)?;
    let regex = compile_pattern(ctx, KEYWORD, pattern)?;
    if let JsonValue::String(item) = instance {
        if !search(ctx, KEYWORD, regex.as_ref(), item)? {
            return Err(ctx.violation(
                KEYWORD,
                ValidationErrorKind::Pattern {
                    instance: helpers::preview(instance),
                    pattern: regex.pattern().to_string(),
                },
            ));
        }
    }
    Ok(())
}
