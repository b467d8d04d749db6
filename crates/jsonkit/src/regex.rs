use core::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use ahash::AHashMap;

use crate::options::{PatternEngine, PatternOptions};

/// A compiled pattern that searches text.
pub(crate) trait RegexEngine: Send + Sync {
    /// Whether the pattern matches anywhere in `text`.
    ///
    /// Fails only when the engine gives up, e.g. on hitting the backtracking limit.
    fn is_match(&self, text: &str) -> Result<bool, String>;

    fn pattern(&self) -> &str;
}

impl RegexEngine for fancy_regex::Regex {
    fn is_match(&self, text: &str) -> Result<bool, String> {
        fancy_regex::Regex::is_match(self, text).map_err(|error| error.to_string())
    }

    fn pattern(&self) -> &str {
        self.as_str()
    }
}

impl RegexEngine for regex::Regex {
    fn is_match(&self, text: &str) -> Result<bool, String> {
        Ok(regex::Regex::is_match(self, text))
    }

    fn pattern(&self) -> &str {
        self.as_str()
    }
}

/// Compile `pattern` with the configured engine and limits.
pub(crate) fn compile(
    pattern: &str,
    options: PatternOptions,
) -> Result<Box<dyn RegexEngine>, String> {
    match options.engine {
        PatternEngine::FancyRegex => {
            let mut builder = fancy_regex::RegexBuilder::new(pattern);
            if let Some(limit) = options.backtrack_limit {
                builder.backtrack_limit(limit);
            }
            if let Some(limit) = options.size_limit {
                builder.delegate_size_limit(limit);
            }
            if let Some(limit) = options.dfa_size_limit {
                builder.delegate_dfa_size_limit(limit);
            }
            builder
                .build()
                .map(|regex| Box::new(regex) as Box<dyn RegexEngine>)
                .map_err(|error| error.to_string())
        }
        PatternEngine::Regex => {
            let mut builder = regex::RegexBuilder::new(pattern);
            if let Some(limit) = options.size_limit {
                builder.size_limit(limit);
            }
            if let Some(limit) = options.dfa_size_limit {
                builder.dfa_size_limit(limit);
            }
            builder
                .build()
                .map(|regex| Box::new(regex) as Box<dyn RegexEngine>)
                .map_err(|error| error.to_string())
        }
    }
}

/// Schema patterns compiled so far, keyed by their source.
///
/// Owned by a validator, so every entry was compiled with the same [`PatternOptions`].
/// Failed compilations are not stored.
#[derive(Default)]
pub(crate) struct PatternCache {
    compiled: RwLock<AHashMap<String, Arc<dyn RegexEngine>>>,
}

impl PatternCache {
    pub(crate) fn get_or_compile(
        &self,
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Arc<dyn RegexEngine>, String> {
        if let Some(regex) = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
        {
            return Ok(Arc::clone(regex));
        }
        let regex: Arc<dyn RegexEngine> = Arc::from(compile(pattern, options)?);
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pattern.to_string(), Arc::clone(&regex));
        Ok(regex)
    }

    pub(crate) fn len(&self) -> usize {
        self.compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCache")
            .field("compiled", &self.len())
            .finish()
    }
}
