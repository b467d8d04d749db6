#![cfg(feature = "serde")]
use jsonkit::{parse, Path};
use serde_json::json;

#[test]
fn values_serialize_as_plain_json() {
    let value = parse("{'a': [1, 2.5, TRUE], `b`: {'c': 'd'}} // comment").expect("Valid JSON");
    assert_eq!(
        serde_json::to_value(&value).expect("Serializable"),
        json!({"a": [1, 2.5, true], "b": {"c": "d"}})
    );
}

#[test]
fn paths_serialize_as_strings() {
    let path = Path::parse("a['b c'][0]").expect("Valid path");
    assert_eq!(
        serde_json::to_value(&path).expect("Serializable"),
        json!("a['b c'][0]")
    );
}
