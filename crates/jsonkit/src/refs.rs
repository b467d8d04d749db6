//! Resolution of `$ref` pointers within the root schema.
use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::{
    paths::{Path, PathStep},
    value::JsonValue,
};

/// Follow an absolute in-document pointer such as `#/definitions/item`.
///
/// Each segment is percent-decoded and then unescaped (`~1` to `/`, `~0` to `~`).
/// Returns the canonical path of the target together with the target itself.
pub(crate) fn resolve_pointer<'s>(
    root: &'s JsonValue,
    reference: &str,
) -> Result<(Path, &'s JsonValue), String> {
    let Some(pointer) = reference.strip_prefix('#') else {
        return Err("only absolute '#/...' references are supported".to_string());
    };
    if pointer.is_empty() {
        return Ok((Path::new(), root));
    }
    let Some(pointer) = pointer.strip_prefix('/') else {
        return Err("a pointer must start with '/'".to_string());
    };
    let mut path = Path::new();
    let mut target = root;
    for raw in pointer.split('/') {
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| format!("segment '{raw}' is not valid UTF-8 once decoded"))?;
        let segment = unescape(decoded);
        target = match target {
            JsonValue::Object(map) => {
                let Some(next) = map.get(segment.as_ref()) else {
                    return Err(format!("no key '{segment}' at '{path}'"));
                };
                path.push(PathStep::ObjectKey(segment.into_owned()));
                next
            }
            JsonValue::Array(items) => {
                let index = segment
                    .parse::<usize>()
                    .map_err(|_| format!("'{segment}' is not an array index at '{path}'"))?;
                let Some(next) = items.get(index) else {
                    return Err(format!("index {index} is out of range at '{path}'"));
                };
                path.push(PathStep::ArrayIndex(index));
                next
            }
            other => {
                return Err(format!(
                    "cannot descend into {} at '{path}'",
                    other.json_type()
                ))
            }
        };
    }
    Ok((path, target))
}

fn unescape(segment: Cow<'_, str>) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use test_case::test_case;

    fn schema() -> JsonValue {
        parse(
            r#"{
                "definitions": {
                    "a/b": {"type": "long"},
                    "m~n": {"type": "string"},
                    "with space": {"minItems": 1},
                    "list": [{"const": 1}, {"const": 2}]
                }
            }"#,
        )
        .expect("Valid JSON")
    }

    #[test_case("#/definitions/a~1b", "definitions['a/b']")]
    #[test_case("#/definitions/m~0n", "definitions['m~n']")]
    #[test_case("#/definitions/with%20space", "definitions['with space']")]
    #[test_case("#/definitions/list/1", "definitions.list[1]")]
    #[test_case("#", "")]
    fn resolves(reference: &str, expected: &str) {
        let schema = schema();
        let (path, _) = resolve_pointer(&schema, reference).expect("Resolvable");
        assert_eq!(path.to_string(), expected);
        assert_eq!(path.resolve(&schema).map(|_| ()), Ok(()));
    }

    #[test_case("other.json#/definitions")]
    #[test_case("#definitions")]
    #[test_case("#/missing")]
    #[test_case("#/definitions/list/7")]
    #[test_case("#/definitions/list/x")]
    #[test_case("#/definitions/a~1b/type/deeper")]
    fn rejects(reference: &str) {
        assert!(resolve_pointer(&schema(), reference).is_err());
    }
}
