use crate::{parse, validator_for, JsonValue, ValidationError, Validator};

fn value(text: &str) -> JsonValue {
    parse(text).unwrap_or_else(|error| panic!("{text} is not valid input: {error}"))
}

fn validator(schema: &str) -> Validator {
    validator_for(&value(schema)).expect("Schema root should be an object")
}

fn run(schema: &str, instance: &str) -> Result<(), ValidationError> {
    validator(schema).validate(&value(instance))
}

#[track_caller]
pub(crate) fn assert_valid(schema: &str, instance: &str) {
    if let Err(error) = run(schema, instance) {
        panic!("{instance} should be valid under {schema}, got: {error}");
    }
    assert!(validator(schema).is_valid(&value(instance)));
}

#[track_caller]
pub(crate) fn assert_violation(schema: &str, instance: &str) -> ValidationError {
    let error = run(schema, instance)
        .err()
        .unwrap_or_else(|| panic!("{instance} should not be valid under {schema}"));
    assert!(error.is_violation(), "Expected a violation, got: {error}");
    assert!(!validator(schema).is_valid(&value(instance)));
    error
}

#[track_caller]
pub(crate) fn assert_schema_defect(schema: &str, instance: &str) -> ValidationError {
    let error = run(schema, instance)
        .err()
        .unwrap_or_else(|| panic!("{schema} should be rejected"));
    assert!(error.is_schema_defect(), "Expected a schema defect, got: {error}");
    error
}

/// Assert that validation fails at the given canonical schema path.
#[track_caller]
pub(crate) fn assert_schema_path(schema: &str, instance: &str, expected: &str) {
    let error = run(schema, instance)
        .err()
        .unwrap_or_else(|| panic!("{instance} should not be valid under {schema}"));
    assert_eq!(error.schema_path().to_string(), expected, "{error}");
}

/// Assert the message that follows the location prefix.
#[track_caller]
pub(crate) fn assert_message(schema: &str, instance: &str, expected: &str) {
    let error = run(schema, instance)
        .err()
        .unwrap_or_else(|| panic!("{instance} should not be valid under {schema}"));
    let message = error.to_string();
    let (_, tail) = message
        .split_once("): ")
        .unwrap_or_else(|| panic!("Unexpected message layout: {message}"));
    assert_eq!(tail, expected);
}
