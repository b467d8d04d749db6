use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "type";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let names: Vec<&str> = match value {
        JsonValue::String(name) => vec![name.as_str()],
        JsonValue::Array(items) if !items.is_empty() => items
            .iter()
            .map(|item| helpers::string(ctx, KEYWORD, item))
            .collect::<Result<_, _>>()?,
        other => {
            return Err(helpers::invalid_constraint(
                ctx,
                KEYWORD,
                "a type name or a non-empty array of type names",
                Some(format!("found {}", other.json_type())),
            ))
        }
    };
    // Every name is checked, so a typo is reported even when an earlier name matches.
    let mut matched = false;
    for name in &names {
        matched |= matches_type(ctx, name, instance)?;
    }
    if matched {
        Ok(())
    } else {
        Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::Type {
                instance: helpers::preview(instance),
                expected: names.iter().map(ToString::to_string).collect(),
            },
        ))
    }
}

fn matches_type(
    ctx: &ValidationContext<'_>,
    name: &str,
    instance: &JsonValue,
) -> Result<bool, ValidationError> {
    let matched = match name {
        "boolean" => instance.is_boolean(),
        "integer" | "long" => instance.is_long(),
        "double" => instance.is_double(),
        "number" => instance.is_number(),
        "string" => instance.is_string(),
        "array" | "list" => instance.is_array(),
        "object" => instance.is_object(),
        // Known name, but no value ever has it.
        "null" => false,
        _ => {
            return Err(ctx.defect(
                KEYWORD,
                ValidationErrorKind::UnknownType {
                    name: name.to_string(),
                },
            ))
        }
    };
    Ok(matched)
}
