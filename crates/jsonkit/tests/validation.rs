use jsonkit::{is_valid, parse, validate, validator_for, Fault, JsonValue, ValidationErrorKind};
use test_case::test_case;

fn value(text: &str) -> JsonValue {
    parse(text).expect("Valid JSON")
}

#[test]
fn min_items_satisfied() {
    assert_eq!(validate(&value("[1,2]"), &value("{'minItems':2}")), Ok(()));
}

#[test]
fn missing_required_property() {
    let error = validate(&value("{}"), &value("{'required':['x']}")).expect_err("Should fail");
    assert_eq!(error.fault(), Fault::Instance);
    assert_eq!(
        error.kind(),
        &ValidationErrorKind::Required {
            property: "x".to_string()
        }
    );
    assert_eq!(error.keyword(), "required");
    assert!(error.to_string().contains("\"x\" is a required property"));
}

#[test]
fn one_of_matching_twice() {
    let error = validate(
        &value("1"),
        &value("{'oneOf':[{'type':'long'},{'const':1}]}"),
    )
    .expect_err("Should fail");
    assert!(error.is_violation());
    assert!(matches!(
        error.kind(),
        ValidationErrorKind::OneOfMultipleValid { .. }
    ));
}

#[test]
fn non_object_schema_root() {
    for schema in ["[]", "true", "'schema'", "1"] {
        let error = validator_for(&value(schema)).expect_err("Should fail");
        assert!(error.is_schema_defect());
        assert!(!is_valid(&value("1"), &value(schema)));
    }
}

#[test]
fn mutual_references_are_rejected() {
    let schema = value(
        "{
            'definitions': {
                'a': {'$ref': '#/definitions/b'},
                'b': {'$ref': '#/definitions/a'}
            },
            'properties': {'x': {'$ref': '#/definitions/a'}}
        }",
    );
    let error = validate(&value("{'x': 1}"), &schema).expect_err("Should fail");
    assert!(error.is_schema_defect());
    assert!(matches!(
        error.kind(),
        ValidationErrorKind::CyclicReference { .. }
    ));
    // Never reached, so nothing to report.
    assert_eq!(validate(&value("{'y': 1}"), &schema), Ok(()));
}

#[test]
fn reference_segments_are_unescaped() {
    let schema = value(
        "{
            'definitions': {'a/b': {'type': 'long'}, 'c d': {'type': 'string'}},
            'properties': {
                'slash': {'$ref': '#/definitions/a~1b'},
                'space': {'$ref': '#/definitions/c%20d'}
            }
        }",
    );
    assert!(is_valid(&value("{'slash': 1, 'space': 'x'}"), &schema));
    let error = validate(&value("{'space': 1}"), &schema).expect_err("Should fail");
    assert_eq!(error.schema_path().to_string(), "definitions['c d'].type");
    assert_eq!(error.instance_path().to_string(), "space");
}

#[test]
fn recursive_tree() {
    let schema = value(
        "{
            'definitions': {
                'node': {
                    'type': 'object',
                    'required': ['value'],
                    'properties': {
                        'value': {'type': 'long'},
                        'children': {'type': 'array', 'items': {'$ref': '#/definitions/node'}}
                    }
                }
            },
            '$ref': '#/definitions/node'
        }",
    );
    let tree = value(
        "{'value': 1, 'children': [{'value': 2}, {'value': 3, 'children': [{'value': 4}]}]}",
    );
    assert_eq!(validate(&tree, &schema), Ok(()));
    let broken = value("{'value': 1, 'children': [{'value': 2, 'children': [{}]}]}");
    let error = validate(&broken, &schema).expect_err("Should fail");
    assert_eq!(error.instance_path().to_string(), "children[0].children[0]");
    assert_eq!(error.schema_path().to_string(), "definitions.node.required");
}

#[test_case("{'minItems': -1}", "[]"; "negative count")]
#[test_case("{'multipleOf': 0}", "2"; "zero divisor")]
#[test_case("{'maxContains': 2}", "[]"; "missing contains")]
#[test_case("{'type': 'color'}", "1"; "unknown type")]
#[test_case("{'format': 'color'}", "'red'"; "unknown format")]
#[test_case("{'pattern': '['}", "'x'"; "invalid regex")]
#[test_case("{'unevaluatedProperties': false}", "{}"; "unsupported")]
#[test_case("{'$ref': '#/missing'}", "1"; "dangling reference")]
#[test_case("{'properties': {'a': 5}}", "{'a': 1}"; "non-object sub-schema")]
fn schema_defects(schema: &str, instance: &str) {
    let error = validate(&value(instance), &value(schema)).expect_err("Should fail");
    assert_eq!(error.fault(), Fault::Schema, "{error}");
    assert!(error.to_string().starts_with("invalid schema at schema path"));
}

#[test]
fn defects_are_not_swallowed_by_combinators() {
    for schema in [
        "{'anyOf': [{'minLength': 'x'}, {}]}",
        "{'oneOf': [{'type': 'nope'}, {}]}",
        "{'not': {'multipleOf': -1}}",
        "{'if': {'format': 'color'}, 'then': {}}",
    ] {
        let error = validate(&value("'x'"), &value(schema)).expect_err(schema);
        assert!(error.is_schema_defect(), "{schema}: {error}");
    }
}

#[test]
fn exact_decimal_arithmetic() {
    assert!(is_valid(&value("0.3"), &value("{'multipleOf': 0.1}")));
    assert!(is_valid(&value("0.3"), &value("{'maximum': 0.3}")));
    assert!(!is_valid(&value("0.30000000000000004"), &value("{'maximum': 0.3}")));
    assert!(is_valid(&value("1"), &value("{'minimum': 1.0, 'maximum': 1.0}")));
}

#[test]
fn validation_is_idempotent() {
    let schema = value(
        "{'properties': {'tags': {'items': {'type': 'string'}, 'uniqueItems': true}}}",
    );
    let instance = value("{'tags': ['a', 'a']}");
    let validator = validator_for(&schema).expect("Valid schema");
    let first = validator.validate(&instance);
    let second = validator.validate(&instance);
    assert_eq!(first, second);
    assert_eq!(
        first.map_err(|error| error.to_string()),
        second.map_err(|error| error.to_string())
    );
}

#[test]
fn full_message() {
    let schema = value("{'properties': {'port': {'type': 'long', 'maximum': 65535}}}");
    let error = validate(&value("{'port': 70000}"), &schema).expect_err("Should fail");
    assert_eq!(
        error.to_string(),
        "schema violation at schema path 'properties.port.maximum' (property 'maximum', instance 'port'): 70000 is greater than the maximum of 65535"
    );
}

#[test]
fn annotations_are_ignored() {
    let schema = value(
        "{
            '$schema': 'http://json-schema.org/draft-07/schema#',
            '$id': 'urn:example',
            'title': 'Example',
            'description': 'Anything goes',
            'default': 1,
            'examples': [1, 2],
            'x-custom': {'minItems': -1}
        }",
    );
    assert!(is_valid(&value("[1]"), &schema));
}
