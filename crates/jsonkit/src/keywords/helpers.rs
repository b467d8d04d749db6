//! Extraction of constraint values and shared plumbing for sub-schema evaluation.
use fraction::BigFraction;

use crate::{
    context::ValidationContext,
    error::{PathError, ValidationError, ValidationErrorKind},
    value::{number, JsonValue, Map},
};

/// Short rendering of an instance for error messages.
pub(crate) fn preview(value: &JsonValue) -> String {
    value.to_string()
}

/// Message of a lower-level failure with its location suffix trimmed.
pub(crate) fn cause(error: &PathError) -> String {
    match error {
        PathError::TypeMismatch {
            expected, found, ..
        } => format!("expected {expected}, found {found}"),
        other => other.to_string(),
    }
}

pub(crate) fn invalid_constraint(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    expected: &'static str,
    cause: Option<String>,
) -> ValidationError {
    ctx.defect(
        keyword,
        ValidationErrorKind::InvalidConstraint { expected, cause },
    )
}

/// A count such as `minItems`: a `Long` that is zero or more.
pub(crate) fn non_negative_integer(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &JsonValue,
) -> Result<u64, ValidationError> {
    const EXPECTED: &str = "a non-negative integer";
    let n = value
        .as_long()
        .map_err(|error| invalid_constraint(ctx, keyword, EXPECTED, Some(cause(&error))))?;
    u64::try_from(n)
        .map_err(|_| invalid_constraint(ctx, keyword, EXPECTED, Some(format!("found {n}"))))
}

pub(crate) fn number(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &JsonValue,
) -> Result<BigFraction, ValidationError> {
    number::to_fraction(value).ok_or_else(|| {
        invalid_constraint(
            ctx,
            keyword,
            "a number",
            Some(format!("found {}", value.json_type())),
        )
    })
}

pub(crate) fn string<'s>(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &'s JsonValue,
) -> Result<&'s str, ValidationError> {
    value
        .as_str()
        .map_err(|error| invalid_constraint(ctx, keyword, "a string", Some(cause(&error))))
}

pub(crate) fn boolean(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &JsonValue,
) -> Result<bool, ValidationError> {
    value
        .as_boolean()
        .map_err(|error| invalid_constraint(ctx, keyword, "a boolean", Some(cause(&error))))
}

pub(crate) fn object<'s>(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &'s JsonValue,
) -> Result<&'s Map, ValidationError> {
    value
        .as_object()
        .map_err(|error| invalid_constraint(ctx, keyword, "an object", Some(cause(&error))))
}

/// The operand list of `allOf`, `anyOf` and `oneOf`.
pub(crate) fn schema_array<'s>(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &'s JsonValue,
) -> Result<&'s [JsonValue], ValidationError> {
    const EXPECTED: &str = "a non-empty array of schemas";
    let schemas = value
        .as_array()
        .map_err(|error| invalid_constraint(ctx, keyword, EXPECTED, Some(cause(&error))))?;
    if schemas.is_empty() {
        return Err(invalid_constraint(ctx, keyword, EXPECTED, None));
    }
    Ok(schemas)
}

/// An array of distinct property names.
pub(crate) fn string_list<'s>(
    ctx: &ValidationContext<'_>,
    keyword: &str,
    value: &'s JsonValue,
) -> Result<Vec<&'s str>, ValidationError> {
    const EXPECTED: &str = "an array of distinct strings";
    let items = value
        .as_array()
        .map_err(|error| invalid_constraint(ctx, keyword, EXPECTED, Some(cause(&error))))?;
    let mut names: Vec<&'s str> = Vec::with_capacity(items.len());
    for item in items {
        let name = item
            .as_str()
            .map_err(|error| invalid_constraint(ctx, keyword, EXPECTED, Some(cause(&error))))?;
        if names.contains(&name) {
            return Err(invalid_constraint(
                ctx,
                keyword,
                EXPECTED,
                Some(format!("\"{name}\" is repeated")),
            ));
        }
        names.push(name);
    }
    Ok(names)
}

/// Evaluate a sub-schema for its outcome only.
///
/// Violations become `false`; schema defects are still errors.
pub(crate) fn probe(result: Result<(), ValidationError>) -> Result<bool, ValidationError> {
    match result {
        Ok(()) => Ok(true),
        Err(error) if error.is_violation() => Ok(false),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Path};
    use test_case::test_case;

    fn with_ctx<T>(check: impl FnOnce(&ValidationContext<'_>) -> T) -> T {
        let root = JsonValue::Object(Map::new());
        let options = crate::ValidationOptions::default();
        let patterns = crate::regex::PatternCache::default();
        check(&ValidationContext::new(&root, &options, &patterns))
    }

    #[test_case("0", 0)]
    #[test_case("42", 42)]
    fn counts(text: &str, expected: u64) {
        let value = parse(text).expect("Valid JSON");
        let n = with_ctx(|ctx| non_negative_integer(ctx, "minItems", &value)).expect("Valid");
        assert_eq!(n, expected);
    }

    #[test_case("-1", "'minItems' must be a non-negative integer: found -1")]
    #[test_case("1.5", "'minItems' must be a non-negative integer: expected long, found double")]
    #[test_case("'2'", "'minItems' must be a non-negative integer: expected long, found string")]
    fn invalid_counts(text: &str, expected: &str) {
        let value = parse(text).expect("Valid JSON");
        let error =
            with_ctx(|ctx| non_negative_integer(ctx, "minItems", &value)).expect_err("Invalid");
        assert!(error.is_schema_defect());
        assert!(error.to_string().ends_with(expected), "{error}");
    }

    #[test]
    fn repeated_names() {
        let value = parse("['a', 'b', 'a']").expect("Valid JSON");
        let error = with_ctx(|ctx| string_list(ctx, "required", &value)).expect_err("Invalid");
        assert!(error.to_string().ends_with("\"a\" is repeated"), "{error}");
    }

    #[test]
    fn probe_only_swallows_violations() {
        let violation = ValidationError::new(
            crate::Fault::Instance,
            ValidationErrorKind::FalseSchema {
                instance: "1".to_string(),
            },
            "additionalProperties",
            Path::new(),
            Path::new(),
        );
        assert_eq!(probe(Err(violation)), Ok(false));
        let defect = ValidationError::new(
            crate::Fault::Schema,
            ValidationErrorKind::ZeroMultipleOf,
            "multipleOf",
            Path::new(),
            Path::new(),
        );
        assert!(probe(Err(defect)).is_err());
        assert_eq!(probe(Ok(())), Ok(true));
    }
}
