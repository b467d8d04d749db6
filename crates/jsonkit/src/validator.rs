//! Schema validation entry points and the per-node recursion.
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::{self, helpers, unsupported},
    options::ValidationOptions,
    refs,
    regex::PatternCache,
    value::{JsonValue, Map},
};

/// A schema paired with the options used to apply it.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: JsonValue,
    options: ValidationOptions,
    /// Patterns compiled on first use, shared by clones.
    patterns: Arc<PatternCache>,
}

impl Validator {
    pub(crate) fn new(options: ValidationOptions, schema: JsonValue) -> Result<Self, ValidationError> {
        if let JsonValue::Object(_) = schema {
            debug!(options = ?options, "Built validator");
            Ok(Validator {
                schema,
                options,
                patterns: Arc::default(),
            })
        } else {
            let patterns = PatternCache::default();
            let ctx = ValidationContext::new(&schema, &options, &patterns);
            Err(ctx.defect_here(ValidationErrorKind::NotASchema {
                found: schema.json_type(),
            }))
        }
    }

    /// Validate `instance`, returning the first failure.
    ///
    /// # Errors
    ///
    /// A schema defect if the schema breaks authoring rules on the evaluated path, otherwise
    /// a violation describing why `instance` does not conform.
    pub fn validate(&self, instance: &JsonValue) -> Result<(), ValidationError> {
        let ctx = ValidationContext::new(&self.schema, &self.options, &self.patterns);
        validate_node(&ctx, &self.schema, instance)
    }

    /// Run validation and discard the error details.
    #[must_use]
    pub fn is_valid(&self, instance: &JsonValue) -> bool {
        self.validate(instance).is_ok()
    }

    #[must_use]
    pub fn schema(&self) -> &JsonValue {
        &self.schema
    }

    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }
}

/// Validate `instance` against the schema fragment at the context's location.
pub(crate) fn validate_node<'s>(
    ctx: &ValidationContext<'s>,
    schema: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let limit = ctx.options().max_depth();
    if ctx.depth() > limit {
        return Err(ctx.defect_here(ValidationErrorKind::DepthLimitExceeded { limit }));
    }
    let JsonValue::Object(fragment) = schema else {
        return Err(ctx.defect_here(ValidationErrorKind::NotASchema {
            found: schema.json_type(),
        }));
    };
    let (resolved, fragment) = dereference(ctx, fragment)?;
    let ctx = resolved.as_ref().unwrap_or(ctx);
    unsupported::reject(ctx, fragment)?;
    for (keyword, value) in fragment {
        if let Some(check) = keywords::get(keyword) {
            trace!(
                keyword = keyword.as_str(),
                schema_path = %ctx.schema_path(),
                "Checking keyword"
            );
            check(ctx, fragment, value, instance)?;
        }
    }
    Ok(())
}

/// Replace a fragment carrying `$ref` by its target, repeatedly.
///
/// Returns a new context only when at least one reference was followed.
fn dereference<'s>(
    ctx: &ValidationContext<'s>,
    mut fragment: &'s Map,
) -> Result<(Option<ValidationContext<'s>>, &'s Map), ValidationError> {
    let mut resolved: Option<ValidationContext<'s>> = None;
    while let Some(reference) = fragment.get("$ref") {
        let current = resolved.as_ref().unwrap_or(ctx);
        let reference = helpers::string(current, "$ref", reference)?;
        let (target_path, target) = refs::resolve_pointer(current.root(), reference).map_err(
            |cause| {
                current.defect(
                    "$ref",
                    ValidationErrorKind::InvalidReference {
                        reference: reference.to_string(),
                        cause,
                    },
                )
            },
        )?;
        let mut next = current.clone().with_schema_path(target_path.clone());
        if !next.mark_ref(&target_path) {
            return Err(current.defect(
                "$ref",
                ValidationErrorKind::CyclicReference {
                    target: target_path,
                },
            ));
        }
        debug!(reference, target = %target_path, "Dereferenced schema");
        fragment = match target {
            JsonValue::Object(map) => map,
            other => {
                return Err(next.defect_here(ValidationErrorKind::NotASchema {
                    found: other.json_type(),
                }))
            }
        };
        resolved = Some(next);
    }
    Ok((resolved, fragment))
}
