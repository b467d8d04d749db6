use crate::{error::ValidationError, validator::Validator, value::JsonValue};

const DEFAULT_PARSE_DEPTH: usize = 128;
const DEFAULT_VALIDATION_DEPTH: usize = 256;

/// Limits applied while reading input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Maximum nesting of arrays and objects.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_PARSE_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PatternEngine {
    /// `fancy-regex`: supports look-around and backreferences.
    #[default]
    FancyRegex,
    /// `regex`: linear time, no backtracking features.
    Regex,
}

/// Regular expression engine used by `pattern`, `patternProperties` and the `regex` format,
/// together with its resource limits.
///
/// Limits left unset use the engine's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternOptions {
    pub(crate) engine: PatternEngine,
    pub(crate) backtrack_limit: Option<usize>,
    pub(crate) size_limit: Option<usize>,
    pub(crate) dfa_size_limit: Option<usize>,
}

impl PatternOptions {
    #[must_use]
    pub fn fancy_regex() -> Self {
        PatternOptions {
            engine: PatternEngine::FancyRegex,
            ..PatternOptions::default()
        }
    }
    #[must_use]
    pub fn regex() -> Self {
        PatternOptions {
            engine: PatternEngine::Regex,
            ..PatternOptions::default()
        }
    }
    /// Backtracking steps `fancy-regex` may take before a search gives up. Ignored by `regex`.
    #[must_use]
    pub fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }
    /// Approximate size limit of a compiled program, in bytes.
    #[must_use]
    pub fn size_limit(mut self, limit: usize) -> Self {
        self.size_limit = Some(limit);
        self
    }
    /// Approximate size limit of the lazy DFA cache, in bytes.
    #[must_use]
    pub fn dfa_size_limit(mut self, limit: usize) -> Self {
        self.dfa_size_limit = Some(limit);
        self
    }
}

/// Configuration for building a [`Validator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    pattern_options: PatternOptions,
    validate_formats: bool,
    max_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            pattern_options: PatternOptions::default(),
            validate_formats: true,
            max_depth: DEFAULT_VALIDATION_DEPTH,
        }
    }
}

impl ValidationOptions {
    /// Build a validator for `schema`.
    ///
    /// # Errors
    ///
    /// Returns a schema defect if `schema` is not an object.
    pub fn build(&self, schema: &JsonValue) -> Result<Validator, ValidationError> {
        Validator::new(self.clone(), schema.clone())
    }
    #[must_use]
    pub fn with_pattern_options(mut self, options: PatternOptions) -> Self {
        self.pattern_options = options;
        self
    }
    /// Whether `format` is checked. Unknown format names are rejected either way.
    #[must_use]
    pub fn should_validate_formats(mut self, yes: bool) -> Self {
        self.validate_formats = yes;
        self
    }
    /// Maximum nesting of sub-schema evaluation.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
    pub(crate) fn pattern_options(&self) -> PatternOptions {
        self.pattern_options
    }
    pub(crate) fn validate_formats(&self) -> bool {
        self.validate_formats
    }
    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }
}
