use std::sync::Arc;

use crate::{
    context::ValidationContext,
    error::ValidationError,
    keywords::{helpers, pattern},
    regex::RegexEngine,
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "patternProperties";

pub(crate) type CompiledPatterns<'s> = Vec<(&'s str, Arc<dyn RegexEngine>, &'s JsonValue)>;

/// Compile every key of a `patternProperties` object.
pub(crate) fn compile_patterns<'s>(
    ctx: &ValidationContext<'_>,
    patterns: &'s Map,
) -> Result<CompiledPatterns<'s>, ValidationError> {
    patterns
        .iter()
        .map(|(source, schema)| {
            let regex = pattern::compile_pattern(ctx, KEYWORD, source)?;
            Ok((source.as_str(), regex, schema))
        })
        .collect()
}

/// Whether any pattern matches `key`.
pub(crate) fn is_covered(
    ctx: &ValidationContext<'_>,
    patterns: &CompiledPatterns<'_>,
    key: &str,
) -> Result<bool, ValidationError> {
    for (_, regex, _) in patterns {
        if pattern::search(ctx, KEYWORD, regex.as_ref(), key)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let patterns = compile_patterns(ctx, helpers::object(ctx, KEYWORD, value)?)?;
    if let JsonValue::Object(item) = instance {
        for (key, property) in item {
            for (source, regex, schema) in &patterns {
                if pattern::search(ctx, KEYWORD, regex.as_ref(), key)? {
                    validate_node(
                        &ctx.descend()
                            .schema_step(KEYWORD)
                            .schema_step(*source)
                            .instance_step(key),
                        schema,
                        property,
                    )?;
                }
            }
        }
    }
    Ok(())
}
