use std::sync::Arc;

use ahash::AHashSet;

use crate::{
    error::{Fault, ValidationError, ValidationErrorKind},
    options::ValidationOptions,
    paths::{Path, PathStep},
    regex::{PatternCache, RegexEngine},
    value::JsonValue,
};

/// State of one recursive descent.
///
/// Every sub-schema evaluation gets its own copy, so a failing `anyOf` branch cannot leak
/// anything into its siblings.
#[derive(Debug, Clone)]
pub(crate) struct ValidationContext<'s> {
    root: &'s JsonValue,
    options: &'s ValidationOptions,
    patterns: &'s PatternCache,
    /// Canonical location of the current schema fragment.
    schema_path: Path,
    instance_path: Path,
    /// `$ref` targets already followed for the current instance location.
    visited_refs: AHashSet<Path>,
    depth: usize,
}

impl<'s> ValidationContext<'s> {
    pub(crate) fn new(
        root: &'s JsonValue,
        options: &'s ValidationOptions,
        patterns: &'s PatternCache,
    ) -> Self {
        Self {
            root,
            options,
            patterns,
            schema_path: Path::new(),
            instance_path: Path::new(),
            visited_refs: AHashSet::new(),
            depth: 0,
        }
    }

    pub(crate) fn root(&self) -> &'s JsonValue {
        self.root
    }

    pub(crate) fn options(&self) -> &'s ValidationOptions {
        self.options
    }

    /// Compile a schema-side pattern, reusing earlier compilations of the same source.
    pub(crate) fn pattern(&self, source: &str) -> Result<Arc<dyn RegexEngine>, String> {
        self.patterns
            .get_or_compile(source, self.options.pattern_options())
    }

    pub(crate) fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// A copy one level deeper.
    pub(crate) fn descend(&self) -> Self {
        let mut ctx = self.clone();
        ctx.depth += 1;
        ctx
    }

    pub(crate) fn schema_step(mut self, step: impl Into<PathStep>) -> Self {
        self.schema_path.push(step);
        self
    }

    /// Moving to another instance location makes progress, so earlier `$ref` hops no longer
    /// indicate a cycle.
    pub(crate) fn instance_step(mut self, step: impl Into<PathStep>) -> Self {
        self.instance_path.push(step);
        self.visited_refs.clear();
        self
    }

    pub(crate) fn with_schema_path(mut self, path: Path) -> Self {
        self.schema_path = path;
        self
    }

    /// Record a dereferenced target. Returns `false` if it was already followed.
    pub(crate) fn mark_ref(&mut self, target: &Path) -> bool {
        self.visited_refs.insert(target.clone())
    }

    fn error(&self, fault: Fault, keyword: &str, kind: ValidationErrorKind) -> ValidationError {
        ValidationError::new(
            fault,
            kind,
            keyword,
            self.schema_path.join(keyword),
            self.instance_path.clone(),
        )
    }

    /// The instance fails `keyword` of the current fragment.
    pub(crate) fn violation(&self, keyword: &str, kind: ValidationErrorKind) -> ValidationError {
        self.error(Fault::Instance, keyword, kind)
    }

    /// `keyword` of the current fragment is malformed.
    pub(crate) fn defect(&self, keyword: &str, kind: ValidationErrorKind) -> ValidationError {
        self.error(Fault::Schema, keyword, kind)
    }

    /// The current fragment as a whole is malformed.
    pub(crate) fn defect_here(&self, kind: ValidationErrorKind) -> ValidationError {
        let keyword = self
            .schema_path
            .steps()
            .iter()
            .rev()
            .find_map(|step| match step {
                PathStep::ObjectKey(key) => Some(key.as_str()),
                PathStep::ArrayIndex(_) => None,
            })
            .unwrap_or_default();
        ValidationError::new(
            Fault::Schema,
            kind,
            keyword,
            self.schema_path.clone(),
            self.instance_path.clone(),
        )
    }
}
