use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "dependentRequired";

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let dependencies = helpers::object(ctx, KEYWORD, value)?
        .iter()
        .map(|(property, names)| Ok((property, helpers::string_list(ctx, KEYWORD, names)?)))
        .collect::<Result<Vec<_>, ValidationError>>()?;
    let JsonValue::Object(item) = instance else {
        return Ok(());
    };
    for (property, names) in dependencies {
        if !item.contains_key(property) {
            continue;
        }
        if let Some(missing) = names.iter().find(|name| !item.contains_key(**name)) {
            return Err(ctx.violation(
                KEYWORD,
                ValidationErrorKind::DependentRequired {
                    property: property.clone(),
                    dependency: (*missing).to_string(),
                },
            ));
        }
    }
    Ok(())
}
