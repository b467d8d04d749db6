//! `items` in both its uniform and positional forms, plus `additionalItems`.
use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    validator::validate_node,
    value::{JsonValue, Map},
};

pub(crate) fn items<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    match value {
        JsonValue::Object(_) => {
            if let JsonValue::Array(elements) = instance {
                for (idx, element) in elements.iter().enumerate() {
                    validate_node(
                        &ctx.descend().schema_step("items").instance_step(idx),
                        value,
                        element,
                    )?;
                }
            }
            Ok(())
        }
        JsonValue::Array(schemas) => {
            for (idx, schema) in schemas.iter().enumerate() {
                if !schema.is_object() {
                    return Err(ctx
                        .clone()
                        .schema_step("items")
                        .schema_step(idx)
                        .defect_here(ValidationErrorKind::NotASchema {
                            found: schema.json_type(),
                        }));
                }
            }
            if let JsonValue::Array(elements) = instance {
                for (idx, (schema, element)) in schemas.iter().zip(elements).enumerate() {
                    validate_node(
                        &ctx.descend()
                            .schema_step("items")
                            .schema_step(idx)
                            .instance_step(idx),
                        schema,
                        element,
                    )?;
                }
            }
            Ok(())
        }
        other => Err(helpers::invalid_constraint(
            ctx,
            "items",
            "a schema or an array of schemas",
            Some(format!("found {}", other.json_type())),
        )),
    }
}

/// Only meaningful next to a positional `items`; ignored otherwise.
pub(crate) fn additional_items<'s>(
    ctx: &ValidationContext<'s>,
    parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    const KEYWORD: &str = "additionalItems";
    if !matches!(value, JsonValue::Boolean(_) | JsonValue::Object(_)) {
        return Err(helpers::invalid_constraint(
            ctx,
            KEYWORD,
            "a boolean or a schema",
            Some(format!("found {}", value.json_type())),
        ));
    }
    let (Some(JsonValue::Array(positional)), JsonValue::Array(elements)) =
        (parent.get("items"), instance)
    else {
        return Ok(());
    };
    let extra = elements.get(positional.len()..).unwrap_or_default();
    match value {
        JsonValue::Boolean(false) if !extra.is_empty() => Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::AdditionalItems {
                unexpected: extra.iter().map(helpers::preview).collect(),
            },
        )),
        JsonValue::Object(_) => {
            for (idx, element) in extra.iter().enumerate() {
                validate_node(
                    &ctx.descend()
                        .schema_step(KEYWORD)
                        .instance_step(positional.len() + idx),
                    value,
                    element,
                )?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
