//! # jsonkit
//!
//! A lenient JSON reader with path-based access and a JSON Schema style validator.
//!
//! The reader accepts a superset of JSON: `//`, `#` and `/* */` comments, strings
//! delimited by `"`, `'` or a back-tick, and case-insensitive booleans. There is no
//! `null`.
//!
//! ```rust
//! # fn main() -> Result<(), jsonkit::Error> {
//! let document = jsonkit::parse("{'a': [{'b': true}]} // trailing comment")?;
//! assert!(document.get_boolean("a[0].b")?);
//!
//! let schema = jsonkit::parse("{'required': ['x']}")?;
//! let error = jsonkit::validate(&document, &schema).expect_err("`x` is missing");
//! assert!(error.is_violation());
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation
//!
//! [`validator_for`] checks that the schema root is an object. The rest of the schema is
//! checked lazily, as each fragment is reached, and authoring mistakes are reported as
//! schema defects, distinct from violations by the instance:
//!
//! ```rust
//! # fn main() -> Result<(), jsonkit::Error> {
//! let schema = jsonkit::parse("{'minItems': -1}")?;
//! let validator = jsonkit::validator_for(&schema)?;
//! let error = validator.validate(&jsonkit::parse("[]")?).expect_err("Broken schema");
//! assert!(error.is_schema_defect());
//! # Ok(())
//! # }
//! ```
mod context;
mod error;
mod keywords;
mod options;
mod paths;
mod refs;
mod regex;
mod scanner;
#[cfg(test)]
mod tests_util;
mod validator;
mod value;

pub use error::{
    Error, Fault, ParseError, ParseErrorKind, PathError, ValidationError, ValidationErrorKind,
};
pub use options::{ParseOptions, PatternOptions, ValidationOptions};
pub use paths::{Path, PathStep};
pub use validator::Validator;
pub use value::{JsonType, JsonValue, Map};

/// Parse `text` with the default limits.
///
/// # Errors
///
/// Returns [`ParseError`] if `text` is malformed, contains a duplicate key or trailing content.
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    parse_with(text, &ParseOptions::default())
}

/// Parse `text` with custom limits.
///
/// # Errors
///
/// See [`parse`]. Nesting beyond [`ParseOptions::max_depth`] is reported as well.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<JsonValue, ParseError> {
    value::parse_document(text, options)
}

/// Resolve a path such as `a.b[0]['key with spaces']` against `value`.
///
/// # Errors
///
/// [`PathError::Invalid`] for a malformed path, [`PathError::NotFound`] and
/// [`PathError::TypeMismatch`] when it does not lead anywhere.
pub fn resolve<'v>(value: &'v JsonValue, path: &str) -> Result<&'v JsonValue, PathError> {
    value.resolve(path)
}

/// Resolve an already tokenized path.
///
/// # Errors
///
/// See [`Path::resolve`].
pub fn resolve_path<'v>(value: &'v JsonValue, path: &Path) -> Result<&'v JsonValue, PathError> {
    path.resolve(value)
}

/// Create a validator with the default options.
///
/// # Errors
///
/// Returns a schema defect if `schema` is not an object.
pub fn validator_for(schema: &JsonValue) -> Result<Validator, ValidationError> {
    options().build(schema)
}

/// Builder for a validator with non-default options.
///
/// ```rust
/// # fn main() -> Result<(), jsonkit::Error> {
/// use jsonkit::PatternOptions;
///
/// let schema = jsonkit::parse("{'format': 'ipv4'}")?;
/// let validator = jsonkit::options()
///     .with_pattern_options(PatternOptions::regex())
///     .should_validate_formats(false)
///     .build(&schema)?;
/// assert!(validator.is_valid(&jsonkit::parse("'not an address'")?));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn options() -> ValidationOptions {
    ValidationOptions::default()
}

/// Validate `instance` against `schema` in one call.
///
/// # Errors
///
/// The first schema defect or violation encountered.
pub fn validate(instance: &JsonValue, schema: &JsonValue) -> Result<(), ValidationError> {
    validator_for(schema)?.validate(instance)
}

/// Like [`validate`], but only reports whether validation succeeded.
///
/// Schema defects are reported as `false` as well.
#[must_use]
pub fn is_valid(instance: &JsonValue, schema: &JsonValue) -> bool {
    validate(instance, schema).is_ok()
}
