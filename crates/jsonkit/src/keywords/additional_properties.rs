use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::{helpers, pattern_properties},
    validator::validate_node,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "additionalProperties";

/// Applies to instance keys matched by neither `properties` nor `patternProperties`.
pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    match value {
        JsonValue::Boolean(true) => return Ok(()),
        JsonValue::Boolean(false) | JsonValue::Object(_) => {}
        other => {
            return Err(helpers::invalid_constraint(
                ctx,
                KEYWORD,
                "a boolean or a schema",
                Some(format!("found {}", other.json_type())),
            ))
        }
    }
    let JsonValue::Object(item) = instance else {
        return Ok(());
    };
    let declared = match parent.get("properties") {
        Some(JsonValue::Object(properties)) => Some(properties),
        _ => None,
    };
    let patterns = match parent.get("patternProperties") {
        Some(JsonValue::Object(patterns)) => pattern_properties::compile_patterns(ctx, patterns)?,
        _ => Vec::new(),
    };
    let mut unexpected = Vec::new();
    for (key, property) in item {
        if declared.is_some_and(|properties| properties.contains_key(key))
            || pattern_properties::is_covered(ctx, &patterns, key)?
        {
            continue;
        }
        if value.is_object() {
            validate_node(
                &ctx.descend().schema_step(KEYWORD).instance_step(key),
                value,
                property,
            )?;
        } else {
            unexpected.push(key.clone());
        }
    }
    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::AdditionalProperties { unexpected },
        ))
    }
}
