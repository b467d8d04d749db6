//! Error types shared by the parser, the path resolver and the schema validator.
use core::fmt;

use crate::{paths::Path, value::JsonType};

/// Any failure produced by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// What went wrong while reading input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token is present but malformed.
    Malformed,
    /// Input ended while more was expected.
    Unterminated,
    /// The same key appears twice within one object.
    DuplicateKey,
    /// Arrays and objects are nested deeper than the configured limit.
    DepthLimitExceeded,
    /// Non-whitespace text follows the top-level value.
    TrailingContent,
}

/// Malformed input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line} near `{context}`{}", describe_expected(.expected))]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    line: usize,
    offset: usize,
    context: String,
    expected: String,
}

fn describe_expected(expected: &str) -> String {
    if expected.is_empty() {
        String::new()
    } else {
        format!(" (expected {expected})")
    }
}

impl ParseError {
    pub(crate) fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        line: usize,
        offset: usize,
        context: String,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            offset,
            context,
            expected: expected.into(),
        }
    }
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
    /// 1-based line of the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
    /// Byte offset of the failure.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
    /// Input text immediately preceding the failure point.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
    /// Textual description of the tokens that would have been accepted.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

/// Failures produced while tokenizing or resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path string itself is malformed.
    #[error("invalid key '{path}' at offset {position}: {reason}")]
    Invalid {
        path: String,
        position: usize,
        reason: String,
    },
    /// A well-formed path does not exist in the value.
    #[error("no value found at '{path}'")]
    NotFound { path: Path },
    /// A step needs a container the current node is not.
    #[error("expected {expected}, found {found} at '{path}'")]
    TypeMismatch {
        path: Path,
        expected: JsonType,
        found: JsonType,
    },
}

impl PathError {
    pub(crate) fn invalid(path: &str, position: usize, reason: impl Into<String>) -> Self {
        PathError::Invalid {
            path: path.to_string(),
            position,
            reason: reason.into(),
        }
    }

    /// Re-anchor an error raised relative to a node at `base`.
    pub(crate) fn rebase(self, base: &Path) -> Self {
        match self {
            PathError::NotFound { path } => PathError::NotFound {
                path: base.concat(&path),
            },
            PathError::TypeMismatch {
                path,
                expected,
                found,
            } => PathError::TypeMismatch {
                path: base.concat(&path),
                expected,
                found,
            },
            invalid @ PathError::Invalid { .. } => invalid,
        }
    }
}

/// Which side of a validation run is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The schema document breaks the rules of schema authoring.
    Schema,
    /// The instance violates an otherwise valid schema.
    Instance,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Schema => f.write_str("invalid schema"),
            Fault::Instance => f.write_str("schema violation"),
        }
    }
}

/// An error that occurred during schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    repr: Box<ValidationErrorRepr>,
}

#[derive(Debug, Clone, PartialEq)]
struct ValidationErrorRepr {
    fault: Fault,
    kind: ValidationErrorKind,
    /// Property of the schema fragment that failed.
    keyword: String,
    /// Canonical path of the schema fragment, after `$ref` resolution.
    schema_path: Path,
    /// Location within the validated instance.
    instance_path: Path,
}

/// Kinds of errors that may happen during validation.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ValidationErrorKind {
    // Schema defects.
    /// A schema fragment is not an object.
    NotASchema { found: JsonType },
    /// A constraint carries a value of the wrong shape.
    InvalidConstraint {
        expected: &'static str,
        cause: Option<String>,
    },
    /// A constraint only makes sense next to a sibling keyword.
    MissingSibling { sibling: &'static str },
    UnknownType { name: String },
    UnknownFormat { name: String },
    InvalidRegex { pattern: String, cause: String },
    ZeroMultipleOf,
    InvalidReference { reference: String, cause: String },
    CyclicReference { target: Path },
    Unsupported,
    DepthLimitExceeded { limit: usize },
    // Instance violations.
    Type { instance: String, expected: Vec<String> },
    Enum { instance: String, options: String },
    Constant { instance: String, expected: String },
    AnyOf { instance: String },
    OneOfNotValid { instance: String },
    OneOfMultipleValid { instance: String },
    Not { instance: String, schema: String },
    FalseSchema { instance: String },
    MultipleOf { instance: String, multiple_of: String },
    Minimum { instance: String, limit: String },
    Maximum { instance: String, limit: String },
    ExclusiveMinimum { instance: String, limit: String },
    ExclusiveMaximum { instance: String, limit: String },
    MinLength { instance: String, limit: u64 },
    MaxLength { instance: String, limit: u64 },
    Pattern { instance: String, pattern: String },
    BacktrackLimitExceeded { instance: String, cause: String },
    Format { instance: String, format: String },
    MinItems { instance: String, limit: u64 },
    MaxItems { instance: String, limit: u64 },
    UniqueItems { instance: String },
    AdditionalItems { unexpected: Vec<String> },
    Contains { instance: String },
    MinContains { instance: String, limit: u64, found: u64 },
    MaxContains { instance: String, limit: u64, found: u64 },
    AdditionalProperties { unexpected: Vec<String> },
    Required { property: String },
    DependentRequired { property: String, dependency: String },
    MinProperties { instance: String, limit: u64 },
    MaxProperties { instance: String, limit: u64 },
}

impl ValidationError {
    pub(crate) fn new(
        fault: Fault,
        kind: ValidationErrorKind,
        keyword: impl Into<String>,
        schema_path: Path,
        instance_path: Path,
    ) -> Self {
        Self {
            repr: Box::new(ValidationErrorRepr {
                fault,
                kind,
                keyword: keyword.into(),
                schema_path,
                instance_path,
            }),
        }
    }
    #[must_use]
    pub fn fault(&self) -> Fault {
        self.repr.fault
    }
    /// The schema document itself is defective.
    #[must_use]
    pub fn is_schema_defect(&self) -> bool {
        self.repr.fault == Fault::Schema
    }
    /// The instance does not conform to a valid schema.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        self.repr.fault == Fault::Instance
    }
    #[must_use]
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.repr.kind
    }
    /// Name of the schema property that failed.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.repr.keyword
    }
    /// Canonical path of the failing schema fragment.
    #[must_use]
    pub fn schema_path(&self) -> &Path {
        &self.repr.schema_path
    }
    #[must_use]
    pub fn instance_path(&self) -> &Path {
        &self.repr.instance_path
    }
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at schema path '{}' (property '{}', instance '{}'): ",
            self.repr.fault, self.repr.schema_path, self.repr.keyword, self.repr.instance_path
        )?;
        self.repr.kind.describe(&self.repr.keyword, f)
    }
}

fn plural(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

fn write_unexpected(f: &mut fmt::Formatter<'_>, unexpected: &[String]) -> fmt::Result {
    let verb = if unexpected.len() == 1 { "was" } else { "were" };
    write!(f, "({} {verb} unexpected)", unexpected.join(", "))
}

impl ValidationErrorKind {
    fn describe(&self, keyword: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::NotASchema { found } => {
                write!(f, "a schema must be an object, found {found}")
            }
            ValidationErrorKind::InvalidConstraint { expected, cause } => {
                write!(f, "'{keyword}' must be {expected}")?;
                if let Some(cause) = cause {
                    write!(f, ": {cause}")?;
                }
                Ok(())
            }
            ValidationErrorKind::MissingSibling { sibling } => {
                write!(f, "'{keyword}' requires a sibling '{sibling}' keyword")
            }
            ValidationErrorKind::UnknownType { name } => {
                write!(f, "\"{name}\" is not a known type name")
            }
            ValidationErrorKind::UnknownFormat { name } => {
                write!(f, "\"{name}\" is not a known format")
            }
            ValidationErrorKind::InvalidRegex { pattern, cause } => {
                write!(f, "\"{pattern}\" is not a valid regular expression: {cause}")
            }
            ValidationErrorKind::ZeroMultipleOf => {
                f.write_str("'multipleOf' must be strictly greater than 0")
            }
            ValidationErrorKind::InvalidReference { reference, cause } => {
                write!(f, "cannot resolve \"{reference}\": {cause}")
            }
            ValidationErrorKind::CyclicReference { target } => {
                write!(f, "cyclic $ref through '{target}'")
            }
            ValidationErrorKind::Unsupported => write!(
                f,
                "'{keyword}' is not supported, redesign the schema without it"
            ),
            ValidationErrorKind::DepthLimitExceeded { limit } => {
                write!(f, "validation nested deeper than {limit} levels")
            }
            ValidationErrorKind::Type { instance, expected } => {
                if let [single] = expected.as_slice() {
                    write!(f, "{instance} is not of type \"{single}\"")
                } else {
                    write!(f, "{instance} is not of types ")?;
                    let quoted: Vec<String> =
                        expected.iter().map(|name| format!("\"{name}\"")).collect();
                    f.write_str(&quoted.join(", "))
                }
            }
            ValidationErrorKind::Enum { instance, options } => {
                write!(f, "{instance} is not one of {options}")
            }
            ValidationErrorKind::Constant { instance, expected } => {
                write!(f, "{expected} was expected, found {instance}")
            }
            ValidationErrorKind::AnyOf { instance } => write!(
                f,
                "{instance} is not valid under any of the schemas listed in the 'anyOf' keyword"
            ),
            ValidationErrorKind::OneOfNotValid { instance } => write!(
                f,
                "{instance} is not valid under any of the schemas listed in the 'oneOf' keyword"
            ),
            ValidationErrorKind::OneOfMultipleValid { instance } => write!(
                f,
                "{instance} is valid under more than one of the schemas listed in the 'oneOf' keyword"
            ),
            ValidationErrorKind::Not { instance, schema } => {
                write!(f, "{schema} is not allowed for {instance}")
            }
            ValidationErrorKind::FalseSchema { instance } => {
                write!(f, "False schema does not allow {instance}")
            }
            ValidationErrorKind::MultipleOf {
                instance,
                multiple_of,
            } => write!(f, "{instance} is not a multiple of {multiple_of}"),
            ValidationErrorKind::Minimum { instance, limit } => {
                write!(f, "{instance} is less than the minimum of {limit}")
            }
            ValidationErrorKind::Maximum { instance, limit } => {
                write!(f, "{instance} is greater than the maximum of {limit}")
            }
            ValidationErrorKind::ExclusiveMinimum { instance, limit } => write!(
                f,
                "{instance} is less than or equal to the minimum of {limit}"
            ),
            ValidationErrorKind::ExclusiveMaximum { instance, limit } => write!(
                f,
                "{instance} is greater than or equal to the maximum of {limit}"
            ),
            ValidationErrorKind::MinLength { instance, limit } => write!(
                f,
                "{instance} is shorter than {limit} {}",
                plural(*limit, "character", "characters")
            ),
            ValidationErrorKind::MaxLength { instance, limit } => write!(
                f,
                "{instance} is longer than {limit} {}",
                plural(*limit, "character", "characters")
            ),
            ValidationErrorKind::Pattern { instance, pattern } => {
                write!(f, "{instance} does not match \"{pattern}\"")
            }
            ValidationErrorKind::BacktrackLimitExceeded { instance, cause } => {
                write!(f, "matching {instance} gave up: {cause}")
            }
            ValidationErrorKind::Format { instance, format } => {
                write!(f, "{instance} is not a \"{format}\"")
            }
            ValidationErrorKind::MinItems { instance, limit } => write!(
                f,
                "{instance} has less than {limit} {}",
                plural(*limit, "item", "items")
            ),
            ValidationErrorKind::MaxItems { instance, limit } => write!(
                f,
                "{instance} has more than {limit} {}",
                plural(*limit, "item", "items")
            ),
            ValidationErrorKind::UniqueItems { instance } => {
                write!(f, "{instance} has non-unique elements")
            }
            ValidationErrorKind::AdditionalItems { unexpected } => {
                f.write_str("Additional items are not allowed ")?;
                write_unexpected(f, unexpected)
            }
            ValidationErrorKind::Contains { instance } => {
                write!(f, "None of {instance} are valid under the given schema")
            }
            ValidationErrorKind::MinContains {
                instance,
                limit,
                found,
            } => write!(
                f,
                "{instance} contains {found} matching {}, at least {limit} required",
                plural(*found, "item", "items")
            ),
            ValidationErrorKind::MaxContains {
                instance,
                limit,
                found,
            } => write!(
                f,
                "{instance} contains {found} matching {}, at most {limit} allowed",
                plural(*found, "item", "items")
            ),
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                f.write_str("Additional properties are not allowed ")?;
                let quoted: Vec<String> = unexpected.iter().map(|key| format!("'{key}'")).collect();
                write_unexpected(f, &quoted)
            }
            ValidationErrorKind::Required { property } => {
                write!(f, "\"{property}\" is a required property")
            }
            ValidationErrorKind::DependentRequired {
                property,
                dependency,
            } => write!(
                f,
                "\"{dependency}\" is a required property when \"{property}\" is present"
            ),
            ValidationErrorKind::MinProperties { instance, limit } => write!(
                f,
                "{instance} has less than {limit} {}",
                plural(*limit, "property", "properties")
            ),
            ValidationErrorKind::MaxProperties { instance, limit } => write!(
                f,
                "{instance} has more than {limit} {}",
                plural(*limit, "property", "properties")
            ),
        }
    }
}
