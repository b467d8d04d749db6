//! Character-level input tracking.
use crate::{
    error::{ParseError, ParseErrorKind},
    options::ParseOptions,
};

/// Maximum number of characters shown before the failure point.
const CONTEXT_CHARS: usize = 40;

/// Cursor over the full input text.
///
/// Positions are byte offsets that always sit on a character boundary.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, options: &ParseOptions) -> Self {
        Self {
            text,
            position: 0,
            depth: 0,
            max_depth: options.max_depth(),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    pub(crate) fn peek_next(&self) -> Option<char> {
        let mut chars = self.text[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Consume one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    pub(crate) fn looking_at(&self, fragment: &str) -> bool {
        self.text[self.position..].starts_with(fragment)
    }

    /// Check whether `fragment` starts at the cursor, moving past it if `advance` is set.
    pub(crate) fn consume_literal(&mut self, fragment: &str, advance: bool) -> bool {
        if self.looking_at(fragment) {
            if advance {
                self.position += fragment.len();
            }
            true
        } else {
            false
        }
    }

    pub(crate) fn region(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Skip whitespace together with `//`, `#` and `/* */` comments.
    pub(crate) fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.bump();
                }
                '#' => self.skip_line(),
                '/' => match self.peek_next() {
                    Some('/') => self.skip_line(),
                    Some('*') => self.skip_block_comment()?,
                    _ => {
                        return Err(self.malformed(
                            "'/' does not start a comment",
                            "// / /* / #",
                        ))
                    }
                },
                _ => break,
            }
        }
        Ok(())
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        // Past the opening `/*`
        self.position += 2;
        loop {
            if self.consume_literal("*/", true) {
                return Ok(());
            }
            if self.bump().is_none() {
                return Err(self.unterminated("*/"));
            }
        }
    }

    /// Track one more level of nesting.
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(
                ParseErrorKind::DepthLimitExceeded,
                format!("nesting exceeds {} levels", self.max_depth),
                "",
            ));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn malformed(&self, message: impl Into<String>, expected: &str) -> ParseError {
        self.error(ParseErrorKind::Malformed, message, expected)
    }

    pub(crate) fn unterminated(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::Unterminated, "unterminated input", expected)
    }

    pub(crate) fn error(
        &self,
        kind: ParseErrorKind,
        message: impl Into<String>,
        expected: &str,
    ) -> ParseError {
        self.error_at(self.position, kind, message, expected)
    }

    pub(crate) fn error_at(
        &self,
        offset: usize,
        kind: ParseErrorKind,
        message: impl Into<String>,
        expected: &str,
    ) -> ParseError {
        let offset = offset.min(self.text.len());
        let before = &self.text[..offset];
        let line = before.matches('\n').count() + 1;
        let skip = before.chars().count().saturating_sub(CONTEXT_CHARS);
        let context = before
            .chars()
            .skip(skip)
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        ParseError::new(kind, message, line, offset, context, expected)
    }
}
