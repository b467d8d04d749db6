//! One function per schema keyword.
//!
//! Every check receives the parent fragment, so keywords that depend on siblings
//! (`additionalItems`, `minContains`, `additionalProperties`, ...) can read them directly.
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod array_length;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod dependent_required;
pub(crate) mod dependent_schemas;
pub(crate) mod enum_;
pub(crate) mod format;
pub(crate) mod helpers;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod minmax;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod properties;
pub(crate) mod property_count;
pub(crate) mod property_names;
pub(crate) mod required;
pub(crate) mod string_length;
pub(crate) mod type_;
pub(crate) mod unique_items;
pub(crate) mod unsupported;

use crate::{
    context::ValidationContext,
    error::ValidationError,
    value::{JsonValue, Map},
};

/// Check one keyword of `parent` against `instance`.
pub(crate) type Keyword = for<'s> fn(
    &ValidationContext<'s>,
    &'s Map,
    &'s JsonValue,
    &JsonValue,
) -> Result<(), ValidationError>;

/// Look up the check for `keyword`. Annotations and unknown vocabulary have none.
pub(crate) fn get(keyword: &str) -> Option<Keyword> {
    let check: Keyword = match keyword {
        "type" => type_::validate,
        "enum" => enum_::validate,
        "const" => const_::validate,
        "allOf" => all_of::validate,
        "anyOf" => any_of::validate,
        "oneOf" => one_of::validate,
        "not" => not::validate,
        "if" => if_::validate,
        "multipleOf" => multiple_of::validate,
        "minimum" => minmax::minimum,
        "maximum" => minmax::maximum,
        "exclusiveMinimum" => minmax::exclusive_minimum,
        "exclusiveMaximum" => minmax::exclusive_maximum,
        "minLength" => string_length::min_length,
        "maxLength" => string_length::max_length,
        "pattern" => pattern::validate,
        "format" => format::validate,
        "items" => items::items,
        "additionalItems" => items::additional_items,
        "minItems" => array_length::min_items,
        "maxItems" => array_length::max_items,
        "uniqueItems" => unique_items::validate,
        "contains" => contains::contains,
        "minContains" => contains::min_contains,
        "maxContains" => contains::max_contains,
        "properties" => properties::validate,
        "patternProperties" => pattern_properties::validate,
        "additionalProperties" => additional_properties::validate,
        "required" => required::validate,
        "dependentRequired" => dependent_required::validate,
        "dependentSchemas" => dependent_schemas::validate,
        "minProperties" => property_count::min_properties,
        "maxProperties" => property_count::max_properties,
        "propertyNames" => property_names::validate,
        _ => return None,
    };
    Some(check)
}

#[cfg(test)]
mod tests {
    use super::get;
    use test_case::test_case;

    #[test_case("$schema")]
    #[test_case("$id")]
    #[test_case("title")]
    #[test_case("description")]
    #[test_case("definitions")]
    #[test_case("then")]
    #[test_case("else")]
    #[test_case("x-vendor")]
    #[test_case("unevaluatedItems"; "rejected before dispatch")]
    fn annotations_have_no_check(keyword: &str) {
        assert!(get(keyword).is_none());
    }

    #[test_case("type")]
    #[test_case("minContains")]
    fn keywords_have_checks(keyword: &str) {
        assert!(get(keyword).is_some());
    }
}
