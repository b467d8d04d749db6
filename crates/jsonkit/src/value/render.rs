use core::fmt::{self, Write};

use super::JsonValue;

/// Depth used by `Display`: the top level is expanded, nested containers are summarized.
pub(super) const PREVIEW_DEPTH: usize = 1;

pub(super) fn to_string(value: &JsonValue, depth: Option<usize>) -> String {
    let mut out = String::new();
    // Writing into a `String` never fails.
    let _ = write_value(&mut out, value, depth);
    out
}

/// `None` renders without a depth limit.
pub(super) fn write_value<W: Write>(
    out: &mut W,
    value: &JsonValue,
    depth: Option<usize>,
) -> fmt::Result {
    let nested = depth.map(|d| d.saturating_sub(1));
    match value {
        JsonValue::Boolean(b) => write!(out, "{b}"),
        JsonValue::Long(n) => write!(out, "{n}"),
        // `Debug` keeps a fractional part or exponent, so it reads back as a double.
        JsonValue::Double(n) => write!(out, "{n:?}"),
        JsonValue::String(s) => write_string(out, s),
        JsonValue::Array(items) if items.is_empty() => out.write_str("[]"),
        JsonValue::Array(items) if depth == Some(0) => write!(out, "<{}>", items.len()),
        JsonValue::Array(items) => {
            out.write_char('[')?;
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.write_char(',')?;
                }
                write_value(out, item, nested)?;
            }
            out.write_char(']')
        }
        JsonValue::Object(map) if map.is_empty() => out.write_str("{}"),
        JsonValue::Object(map) if depth == Some(0) => {
            out.write_char('<')?;
            for (idx, key) in map.keys().enumerate() {
                if idx > 0 {
                    out.write_char(',')?;
                }
                out.write_str(key)?;
            }
            out.write_char('>')
        }
        JsonValue::Object(map) => {
            out.write_char('{')?;
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.write_char(',')?;
                }
                write_string(out, key)?;
                out.write_char(':')?;
                write_value(out, item, nested)?;
            }
            out.write_char('}')
        }
    }
}

fn write_string<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use test_case::test_case;

    #[test_case("{'a': [1, 2], 'b': {'c': true}}", 0, "<a,b>")]
    #[test_case("{'a': [1, 2], 'b': {'c': true}}", 1, r#"{"a":<2>,"b":<c>}"#)]
    #[test_case("{'a': [1, 2], 'b': {'c': true}}", 2, r#"{"a":[1,2],"b":{"c":true}}"#)]
    #[test_case("[[1, [2]], 'x']", 0, "<2>")]
    #[test_case("[[1, [2]], 'x']", 1, r#"[<2>,"x"]"#)]
    #[test_case("[[], {}]", 1, "[[],{}]")]
    #[test_case("1.0", 0, "1.0")]
    #[test_case("'q\"'", 0, r#""q\"""#)]
    fn depth_limited(input: &str, depth: usize, expected: &str) {
        let value = parse(input).expect("Valid JSON");
        assert_eq!(value.render_to_depth(depth), expected);
    }

    #[test]
    fn display_is_a_preview() {
        let value = parse("{'a': {'b': {'c': 1}}}").expect("Valid JSON");
        assert_eq!(value.to_string(), r#"{"a":<b>}"#);
        assert_eq!(format!("{value:#}"), r#"{"a":{"b":{"c":1}}}"#);
        assert_eq!(value.render(), format!("{value:#}"));
    }

    #[test_case("[1, 2.5, -3e-7, 'x\\'y', \"back\\\\slash\", true, {'k': [{}]}]")]
    #[test_case("{'nested': {'deeper': [[[1.0]]]}, 'with space': 'v'}")]
    fn render_round_trips(input: &str) {
        let value = parse(input).expect("Valid JSON");
        assert_eq!(parse(&value.render()), Ok(value));
    }

    #[test]
    fn integers_stay_integers() {
        let value = parse("[1, 1.0]").expect("Valid JSON");
        let reparsed = parse(&value.render()).expect("Valid JSON");
        assert!(reparsed.get_long("[0]").is_ok());
        assert!(reparsed.get_double("[1]").is_ok());
    }
}
