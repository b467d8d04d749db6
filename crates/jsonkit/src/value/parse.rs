//! Each variant reads itself from a [`Cursor`] positioned at its first character.
use tracing::trace;

use super::{JsonValue, Map};
use crate::{
    error::{ParseError, ParseErrorKind},
    options::ParseOptions,
    scanner::Cursor,
};

const EXPECTED_VALUE: &str = "{ / [ / \" / <number> / <boolean>";
const EXPECTED_BOOLEAN: &str = "true / false";
const EXPECTED_NUMBER: &str = "<number>";
const STRING_QUOTES: [char; 3] = ['"', '\'', '`'];

pub(crate) fn parse_document(text: &str, options: &ParseOptions) -> Result<JsonValue, ParseError> {
    let mut cursor = Cursor::new(text, options);
    cursor.skip_whitespace()?;
    let value = JsonValue::parse_from(&mut cursor)?;
    cursor.skip_whitespace()?;
    if !cursor.is_at_end() {
        return Err(cursor.error(
            ParseErrorKind::TrailingContent,
            "unexpected content after the top-level value",
            "<end of input>",
        ));
    }
    trace!(bytes = text.len(), "Parsed document");
    Ok(value)
}

fn is_number_char(c: char) -> bool {
    matches!(c, '-' | '+' | '0'..='9' | '.' | 'e' | 'E')
}

impl JsonValue {
    /// Dispatch on the first character of a value.
    pub(crate) fn parse_from(cursor: &mut Cursor<'_>) -> Result<JsonValue, ParseError> {
        match cursor.peek() {
            None => Err(cursor.unterminated(EXPECTED_VALUE)),
            Some('{') => parse_object(cursor).map(JsonValue::Object),
            Some('[') => parse_array(cursor).map(JsonValue::Array),
            Some(c) if STRING_QUOTES.contains(&c) => parse_string(cursor).map(JsonValue::String),
            Some('-' | '+' | '.' | '0'..='9') => parse_number(cursor),
            Some('t' | 'T' | 'f' | 'F') => parse_boolean(cursor).map(JsonValue::Boolean),
            Some('n' | 'N') if cursor.looking_at("null") => Err(cursor.malformed(
                "the null literal is not supported",
                EXPECTED_VALUE,
            )),
            Some(c) => Err(cursor.malformed(format!("unexpected character '{c}'"), EXPECTED_VALUE)),
        }
    }
}

fn parse_boolean(cursor: &mut Cursor<'_>) -> Result<bool, ParseError> {
    let start = cursor.position();
    while cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        cursor.bump();
    }
    let word = cursor.region(start, cursor.position());
    if word.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if word.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(cursor.error_at(
            start,
            ParseErrorKind::Malformed,
            format!("invalid boolean '{word}'"),
            EXPECTED_BOOLEAN,
        ))
    }
}

fn parse_number(cursor: &mut Cursor<'_>) -> Result<JsonValue, ParseError> {
    let start = cursor.position();
    while cursor.peek().is_some_and(is_number_char) {
        cursor.bump();
    }
    let text = cursor.region(start, cursor.position());
    let malformed = || {
        cursor.error_at(
            start,
            ParseErrorKind::Malformed,
            format!("malformed number '{text}'"),
            EXPECTED_NUMBER,
        )
    };
    if text.contains(['.', 'e', 'E']) {
        // Overflow to infinity would render as text that no longer parses.
        match text.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(JsonValue::Double(number)),
            _ => Err(malformed()),
        }
    } else {
        text.parse::<i64>()
            .map(JsonValue::Long)
            .map_err(|_| malformed())
    }
}

/// The opening quote decides the closing one. A backslash keeps the next character verbatim.
fn parse_string(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let Some(quote) = cursor.bump() else {
        return Err(cursor.unterminated("\""));
    };
    let mut out = String::new();
    loop {
        match cursor.bump() {
            None => return Err(cursor.unterminated(&quote.to_string())),
            Some('\\') => match cursor.bump() {
                Some(escaped) => out.push(escaped),
                None => return Err(cursor.unterminated(&quote.to_string())),
            },
            Some(c) if c == quote => return Ok(out),
            Some(c) => out.push(c),
        }
    }
}

/// Consume the separator after an element: `Ok(true)` means another element follows.
fn element_separator(
    cursor: &mut Cursor<'_>,
    terminator: char,
    expected: &str,
    container: &str,
    elements: &str,
) -> Result<bool, ParseError> {
    cursor.skip_whitespace()?;
    match cursor.bump() {
        Some(',') => {
            cursor.skip_whitespace()?;
            if cursor.peek() == Some(terminator) {
                Err(cursor.malformed(
                    format!("comma suggests more {elements} but {container} terminates"),
                    EXPECTED_VALUE,
                ))
            } else {
                Ok(true)
            }
        }
        Some(c) if c == terminator => Ok(false),
        None => Err(cursor.unterminated(expected)),
        Some(c) => Err(cursor.error_at(
            cursor.position() - c.len_utf8(),
            ParseErrorKind::Malformed,
            format!("unexpected '{c}' after {container} element"),
            expected,
        )),
    }
}

fn parse_array(cursor: &mut Cursor<'_>) -> Result<Vec<JsonValue>, ParseError> {
    cursor.enter()?;
    cursor.bump();
    cursor.skip_whitespace()?;
    let mut items = Vec::new();
    if cursor.consume_literal("]", true) {
        cursor.leave();
        return Ok(items);
    }
    loop {
        items.push(JsonValue::parse_from(cursor)?);
        if !element_separator(cursor, ']', ", / ]", "array", "elements")? {
            break;
        }
    }
    cursor.leave();
    Ok(items)
}

fn parse_object(cursor: &mut Cursor<'_>) -> Result<Map, ParseError> {
    cursor.enter()?;
    cursor.bump();
    cursor.skip_whitespace()?;
    let mut map = Map::new();
    if cursor.consume_literal("}", true) {
        cursor.leave();
        return Ok(map);
    }
    loop {
        let key_start = cursor.position();
        match cursor.peek() {
            Some(c) if STRING_QUOTES.contains(&c) => {}
            None => return Err(cursor.unterminated("\"")),
            Some(_) => return Err(cursor.malformed("invalid type for key", "\" / }")),
        }
        let key = parse_string(cursor)?;
        if map.contains_key(&key) {
            return Err(cursor.error_at(
                key_start,
                ParseErrorKind::DuplicateKey,
                format!("duplicate key '{key}'"),
                "",
            ));
        }
        cursor.skip_whitespace()?;
        match cursor.peek() {
            Some(':') => {
                cursor.bump();
            }
            None => return Err(cursor.unterminated(":")),
            Some(_) => return Err(cursor.malformed("missing ':' after key", ":")),
        }
        cursor.skip_whitespace()?;
        let value = JsonValue::parse_from(cursor)?;
        map.insert(key, value);
        if !element_separator(cursor, '}', ", / }", "object", "properties")? {
            break;
        }
    }
    cursor.leave();
    Ok(map)
}
