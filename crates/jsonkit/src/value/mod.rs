//! The immutable value tree produced by the parser.
use core::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::{
    error::{ParseError, PathError},
    paths::Path,
};

pub(crate) mod number;
mod parse;
mod render;

pub(crate) use parse::parse_document;

/// Object storage. Equality ignores key order.
pub type Map = IndexMap<String, JsonValue>;

/// A parsed JSON value.
///
/// Integers and floating point numbers are kept apart and never converted into each other.
/// There is no null variant: the `null` literal is rejected by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Boolean(bool),
    Long(i64),
    Double(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Map),
}

/// The kind of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Boolean,
    Long,
    Double,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonType::Boolean => "boolean",
            JsonType::Long => "long",
            JsonType::Double => "double",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        })
    }
}

macro_rules! typed_accessor {
    ($(#[$meta:meta])* $name:ident, $get:ident, $variant:ident, $ty:ty, $convert:expr) => {
        $(#[$meta])*
        ///
        /// # Errors
        ///
        /// [`PathError::TypeMismatch`] if the value has another type.
        pub fn $name(&self) -> Result<$ty, PathError> {
            match self {
                JsonValue::$variant(inner) => Ok($convert(inner)),
                other => Err(PathError::TypeMismatch {
                    path: Path::new(),
                    expected: JsonType::$variant,
                    found: other.json_type(),
                }),
            }
        }

        /// Resolve `path` and read the value found there.
        ///
        /// # Errors
        ///
        /// Any error from [`JsonValue::resolve`], or a type mismatch at the resolved location.
        pub fn $get(&self, path: &str) -> Result<$ty, PathError> {
            let path = Path::parse(path)?;
            path.resolve(self)?.$name().map_err(|error| error.rebase(&path))
        }
    };
}

impl JsonValue {
    #[must_use]
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Boolean(_) => JsonType::Boolean,
            JsonValue::Long(_) => JsonType::Long,
            JsonValue::Double(_) => JsonType::Double,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, JsonValue::Boolean(_))
    }
    #[must_use]
    pub fn is_long(&self) -> bool {
        matches!(self, JsonValue::Long(_))
    }
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, JsonValue::Double(_))
    }
    /// Either numeric variant.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Long(_) | JsonValue::Double(_))
    }
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    typed_accessor!(as_boolean, get_boolean, Boolean, bool, |b: &bool| *b);
    typed_accessor!(as_long, get_long, Long, i64, |n: &i64| *n);
    typed_accessor!(as_double, get_double, Double, f64, |n: &f64| *n);
    typed_accessor!(as_str, get_str, String, &str, String::as_str);
    typed_accessor!(as_array, get_array, Array, &[JsonValue], Vec::as_slice);
    typed_accessor!(as_object, get_object, Object, &Map, |map| map);

    /// Resolve a path string such as `a.b[2]['odd key']` against this value.
    ///
    /// # Errors
    ///
    /// [`PathError::Invalid`] if the path is malformed, otherwise the errors of
    /// [`Path::resolve`].
    pub fn resolve(&self, path: &str) -> Result<&JsonValue, PathError> {
        Path::parse(path)?.resolve(self)
    }

    /// Render the whole tree as JSON text that parses back into an equal value.
    #[must_use]
    pub fn render(&self) -> String {
        render::to_string(self, None)
    }

    /// Render containers down to `depth` levels.
    ///
    /// Past the budget, arrays collapse to `<N>` and objects to `<k1,k2,...>`.
    #[must_use]
    pub fn render_to_depth(&self, depth: usize) -> String {
        render::to_string(self, Some(depth))
    }
}

/// Default rendering is a one-level preview; the alternate form (`{:#}`) renders everything.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = if f.alternate() {
            None
        } else {
            Some(render::PREVIEW_DEPTH)
        };
        render::write_value(f, self, depth)
    }
}

impl FromStr for JsonValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Boolean(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Long(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Double(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<Map> for JsonValue {
    fn from(value: Map) -> Self {
        JsonValue::Object(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for JsonValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            JsonValue::Boolean(b) => serializer.serialize_bool(*b),
            JsonValue::Long(n) => serializer.serialize_i64(*n),
            JsonValue::Double(n) => serializer.serialize_f64(*n),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use test_case::test_case;

    #[test]
    fn accessors_do_not_convert() {
        let value = parse("[1, 1.5, 'x', true]").expect("Valid JSON");
        assert_eq!(value.get_long("[0]"), Ok(1));
        assert_eq!(value.get_double("[1]"), Ok(1.5));
        assert_eq!(value.get_str("[2]"), Ok("x"));
        assert_eq!(value.get_boolean("[3]"), Ok(true));
        assert_eq!(
            value.get_double("[0]"),
            Err(PathError::TypeMismatch {
                path: Path::parse("[0]").expect("Valid path"),
                expected: JsonType::Double,
                found: JsonType::Long,
            })
        );
    }

    #[test]
    fn type_mismatch_reports_consumed_prefix() {
        let value = parse("{'a': {'b': 1}}").expect("Valid JSON");
        let error = value.resolve("a.b.c.d").expect_err("Should fail");
        assert_eq!(
            error,
            PathError::TypeMismatch {
                path: Path::parse("a.b.c").expect("Valid path"),
                expected: JsonType::Object,
                found: JsonType::Long,
            }
        );
    }

    #[test_case("{'a': [1]}", "a[3]", "a[3]")]
    #[test_case("{'a': [1]}", "b.c", "b")]
    #[test_case("[{'x': 1}]", "[0]['y z']", "[0]['y z']")]
    fn not_found_reports_consumed_prefix(input: &str, path: &str, expected: &str) {
        let value = parse(input).expect("Valid JSON");
        match value.resolve(path) {
            Err(PathError::NotFound { path }) => assert_eq!(path.to_string(), expected),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_path_resolves_to_self() {
        let value = parse("{'a': 1}").expect("Valid JSON");
        assert_eq!(value.resolve(""), Ok(&value));
    }

    #[test]
    fn object_equality_ignores_order() {
        assert_eq!(
            parse("{'a': 1, 'b': [true]}").expect("Valid JSON"),
            parse("{'b': [true], 'a': 1}").expect("Valid JSON")
        );
        assert_ne!(
            parse("[1, 2]").expect("Valid JSON"),
            parse("[2, 1]").expect("Valid JSON")
        );
        assert_ne!(JsonValue::Long(1), JsonValue::Double(1.0));
    }
}
