//! The key language used to address nested values.
//!
//! A path such as `a.b[2]['odd key'].c` is tokenized eagerly into a list of
//! [`PathStep`]s; malformed input is rejected before any traversal happens.
//! The same type labels schema fragments in validation errors, so both read
//! access and error reporting share one grammar.
use core::fmt;
use std::{iter::Peekable, str::CharIndices, str::FromStr};

use crate::{error::PathError, value::JsonValue};

/// A single step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    ObjectKey(String),
    ArrayIndex(usize),
}

impl From<&str> for PathStep {
    fn from(value: &str) -> Self {
        PathStep::ObjectKey(value.to_string())
    }
}

impl From<String> for PathStep {
    fn from(value: String) -> Self {
        PathStep::ObjectKey(value)
    }
}

impl From<&String> for PathStep {
    fn from(value: &String) -> Self {
        PathStep::ObjectKey(value.clone())
    }
}

impl From<usize> for PathStep {
    fn from(value: usize) -> Self {
        PathStep::ArrayIndex(value)
    }
}

/// An ordered sequence of steps. The empty path denotes the node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<PathStep>);

const QUOTES: [char; 3] = ['\'', '"', '`'];

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Path(Vec::new())
    }

    /// Tokenize a path string.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Invalid`] for a trailing or doubled dot, unbalanced brackets or
    /// quotes, empty brackets and array indices that are not non-negative integers.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        Tokenizer::new(path).run()
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this path denotes the current node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&PathStep> {
        self.0.last()
    }

    pub fn push(&mut self, step: impl Into<PathStep>) {
        self.0.push(step.into());
    }

    /// A new path extended by one step.
    #[must_use]
    pub fn join(&self, step: impl Into<PathStep>) -> Path {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(step.into());
        Path(steps)
    }

    /// A new path extended by an object key. `self` is left untouched.
    #[must_use]
    pub fn push_key(&self, key: impl Into<String>) -> Path {
        self.join(PathStep::ObjectKey(key.into()))
    }

    /// A new path extended by an array index. `self` is left untouched.
    #[must_use]
    pub fn push_index(&self, index: usize) -> Path {
        self.join(PathStep::ArrayIndex(index))
    }

    #[must_use]
    pub fn concat(&self, other: &Path) -> Path {
        let mut steps = Vec::with_capacity(self.0.len() + other.0.len());
        steps.extend_from_slice(&self.0);
        steps.extend_from_slice(&other.0);
        Path(steps)
    }

    /// The first `len` steps.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Walk `value` along this path.
    ///
    /// # Errors
    ///
    /// [`PathError::TypeMismatch`] when a step needs a container the current node is not, and
    /// [`PathError::NotFound`] for a missing key or an index out of range. Both carry only the
    /// steps consumed up to and including the failing one.
    pub fn resolve<'v>(&self, value: &'v JsonValue) -> Result<&'v JsonValue, PathError> {
        let mut current = value;
        for (idx, step) in self.0.iter().enumerate() {
            current = match (step, current) {
                (PathStep::ObjectKey(key), JsonValue::Object(map)) => {
                    map.get(key).ok_or_else(|| PathError::NotFound {
                        path: self.prefix(idx + 1),
                    })?
                }
                (PathStep::ArrayIndex(index), JsonValue::Array(items)) => {
                    items.get(*index).ok_or_else(|| PathError::NotFound {
                        path: self.prefix(idx + 1),
                    })?
                }
                (PathStep::ObjectKey(_), other) => {
                    return Err(PathError::TypeMismatch {
                        path: self.prefix(idx + 1),
                        expected: crate::JsonType::Object,
                        found: other.json_type(),
                    })
                }
                (PathStep::ArrayIndex(_), other) => {
                    return Err(PathError::TypeMismatch {
                        path: self.prefix(idx + 1),
                        expected: crate::JsonType::Array,
                        found: other.json_type(),
                    })
                }
            };
        }
        Ok(current)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<T: IntoIterator<Item = PathStep>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Keys written without brackets must survive a round trip through the tokenizer.
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key.chars().all(|c| {
            c.is_ascii_graphic() && !matches!(c, '.' | '[' | ']' | '\\') && !QUOTES.contains(&c)
        })
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.0.iter().enumerate() {
            match step {
                PathStep::ObjectKey(key) if is_bare_key(key) => {
                    if idx > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathStep::ObjectKey(key) => {
                    f.write_str("['")?;
                    for c in key.chars() {
                        if c == '\'' || c == '\\' {
                            f.write_str("\\")?;
                        }
                        write!(f, "{c}")?;
                    }
                    f.write_str("']")?;
                }
                PathStep::ArrayIndex(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Tokenizer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    steps: Vec<PathStep>,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            steps: Vec::new(),
        }
    }

    fn error(&self, position: usize, reason: &str) -> PathError {
        PathError::invalid(self.source, position, reason)
    }

    fn run(mut self) -> Result<Path, PathError> {
        // Set right after a `.`: the next token must be a bare key.
        let mut after_dot = false;
        while let Some(&(position, c)) = self.chars.peek() {
            match c {
                '.' => {
                    if self.steps.is_empty() || after_dot {
                        return Err(self.error(position, "empty key before '.'"));
                    }
                    self.chars.next();
                    after_dot = true;
                }
                '[' => {
                    if after_dot {
                        return Err(self.error(position, "'[' cannot follow '.'"));
                    }
                    self.bracket(position)?;
                }
                ']' => return Err(self.error(position, "unbalanced ']'")),
                _ => {
                    if !self.steps.is_empty() && !after_dot {
                        return Err(self.error(position, "expected '.' or '[' between keys"));
                    }
                    self.bare_key()?;
                    after_dot = false;
                }
            }
        }
        if after_dot {
            return Err(self.error(self.source.len(), "trailing '.'"));
        }
        Ok(Path(self.steps))
    }

    fn bare_key(&mut self) -> Result<(), PathError> {
        let mut key = String::new();
        while let Some(&(position, c)) = self.chars.peek() {
            match c {
                '.' | '[' => break,
                ']' => return Err(self.error(position, "unbalanced ']'")),
                c if QUOTES.contains(&c) => {
                    return Err(self.error(position, "quoted keys must be wrapped in brackets"))
                }
                _ => {
                    key.push(c);
                    self.chars.next();
                }
            }
        }
        self.steps.push(PathStep::ObjectKey(key));
        Ok(())
    }

    fn bracket(&mut self, open: usize) -> Result<(), PathError> {
        self.chars.next();
        match self.chars.peek().copied() {
            None => Err(self.error(open, "unbalanced '['")),
            Some((position, ']')) => Err(self.error(
                position,
                "empty brackets are reserved for appending and cannot be read",
            )),
            Some((_, quote)) if QUOTES.contains(&quote) => {
                self.chars.next();
                let key = self.quoted(open, quote)?;
                match self.chars.next() {
                    Some((_, ']')) => {
                        self.steps.push(PathStep::ObjectKey(key));
                        Ok(())
                    }
                    Some((position, _)) => Err(self.error(position, "expected ']' after quoted key")),
                    None => Err(self.error(open, "unbalanced '['")),
                }
            }
            Some(_) => self.index(open),
        }
    }

    fn quoted(&mut self, open: usize, quote: char) -> Result<String, PathError> {
        let mut key = String::new();
        loop {
            match self.chars.next() {
                None => return Err(self.error(open, "unterminated quoted key")),
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, escaped)) => key.push(escaped),
                    None => return Err(self.error(open, "unterminated quoted key")),
                },
                Some((_, c)) if c == quote => return Ok(key),
                Some((_, c)) => key.push(c),
            }
        }
    }

    fn index(&mut self, open: usize) -> Result<(), PathError> {
        let start = open + 1;
        loop {
            match self.chars.next() {
                None => return Err(self.error(open, "unbalanced '['")),
                Some((end, ']')) => {
                    let digits = &self.source[start..end];
                    let index = digits.parse::<usize>().map_err(|_| {
                        self.error(start, "array index is not a non-negative integer")
                    })?;
                    self.steps.push(PathStep::ArrayIndex(index));
                    return Ok(());
                }
                Some((_, c)) if c.is_ascii_digit() => {}
                Some((position, _)) => {
                    return Err(self.error(position, "array index is not a non-negative integer"))
                }
            }
        }
    }
}
