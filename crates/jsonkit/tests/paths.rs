use jsonkit::{parse, resolve, resolve_path, JsonType, JsonValue, Path, PathError, PathStep};
use test_case::test_case;

fn document() -> JsonValue {
    parse(
        r#"{
            'a': [{'b': true}],
            'server': {'port': 8080, 'ratio': 0.5, 'host': 'localhost'},
            'odd.key': {'with space': ['x', 'y']}
        }"#,
    )
    .expect("Valid JSON")
}

#[test]
fn nested_lookup() {
    let value = parse("{'a':[{'b':true}]}").expect("Valid JSON");
    assert_eq!(resolve(&value, "a[0].b"), Ok(&JsonValue::Boolean(true)));
}

#[test_case("server.port", "8080")]
#[test_case("server.ratio", "0.5")]
#[test_case("server.host", "'localhost'")]
#[test_case("['odd.key']['with space'][1]", "'y'")]
#[test_case("a[0]", "{'b': true}")]
#[test_case("", "{'a': [{'b': true}], 'server': {'port': 8080, 'ratio': 0.5, 'host': 'localhost'}, 'odd.key': {'with space': ['x', 'y']}}")]
fn lookups(path: &str, expected: &str) {
    let value = document();
    assert_eq!(
        resolve(&value, path),
        Ok(&parse(expected).expect("Valid JSON"))
    );
}

#[test]
fn typed_accessors_match_the_source() {
    let value = document();
    assert_eq!(value.get_long("server.port"), Ok(8080));
    assert_eq!(value.get_double("server.ratio"), Ok(0.5));
    assert_eq!(value.get_str("server.host"), Ok("localhost"));
    assert_eq!(value.get_boolean("a[0].b"), Ok(true));
    assert_eq!(
        value.get_object("server").map(|server| server.len()),
        Ok(3)
    );
}

#[test]
fn accessors_never_convert() {
    let value = document();
    assert_eq!(
        value.get_double("server.port"),
        Err(PathError::TypeMismatch {
            path: Path::parse("server.port").expect("Valid path"),
            expected: JsonType::Double,
            found: JsonType::Long,
        })
    );
}

#[test_case("server.port.x", "server.port.x")]
#[test_case("a.b", "a.b")]
#[test_case("server[0].y", "server[0]")]
fn mismatch_reports_the_consumed_prefix(path: &str, expected: &str) {
    match resolve(&document(), path) {
        Err(PathError::TypeMismatch { path, .. }) => assert_eq!(path.to_string(), expected),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test_case("server.missing.deeper", "server.missing")]
#[test_case("a[5].b", "a[5]")]
fn not_found_reports_the_consumed_prefix(path: &str, expected: &str) {
    match resolve(&document(), path) {
        Err(PathError::NotFound { path }) => assert_eq!(path.to_string(), expected),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test_case("a."; "trailing dot")]
#[test_case(".a"; "leading dot")]
#[test_case("a..b"; "double dot")]
#[test_case("a[0"; "unbalanced bracket")]
#[test_case("a]"; "stray bracket")]
#[test_case("a[x]"; "non-integer index")]
#[test_case("a[-1]"; "negative index")]
#[test_case("a['b]"; "unterminated quote")]
fn invalid_paths_fail_eagerly(path: &str) {
    assert!(matches!(
        Path::parse(path),
        Err(PathError::Invalid { .. })
    ));
    // Even against a value where a prefix would resolve.
    assert!(matches!(
        resolve(&document(), path),
        Err(PathError::Invalid { .. })
    ));
}

#[test]
fn tokenized_paths() {
    let path: Path = [
        PathStep::from("odd.key"),
        PathStep::from("with space"),
        PathStep::from(0),
    ]
    .into_iter()
    .collect();
    assert_eq!(path.to_string(), "['odd.key']['with space'][0]");
    assert_eq!(
        resolve_path(&document(), &path),
        Ok(&JsonValue::String("x".to_string()))
    );
    assert_eq!(Path::parse(&path.to_string()), Ok(path));
}
