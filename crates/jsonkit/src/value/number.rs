//! Exact decimal view of numeric values.
//!
//! Both numeric variants are lifted into [`BigFraction`] before any comparison, so `1`
//! and `1.0` compare equal and `0.3` is an exact multiple of `0.1`.
use fraction::{BigFraction, BigUint};

use super::JsonValue;

/// The exact value of a numeric variant, `None` for everything else.
pub(crate) fn to_fraction(value: &JsonValue) -> Option<BigFraction> {
    match value {
        JsonValue::Long(n) => Some(from_i64(*n)),
        JsonValue::Double(n) => Some(from_f64(*n)),
        _ => None,
    }
}

pub(crate) fn from_i64(value: i64) -> BigFraction {
    let magnitude = BigUint::from(value.unsigned_abs());
    if value < 0 {
        BigFraction::new_neg(magnitude, BigUint::from(1u8))
    } else {
        BigFraction::new(magnitude, BigUint::from(1u8))
    }
}

/// Convert through the shortest decimal representation that reads back as `value`.
pub(crate) fn from_f64(value: f64) -> BigFraction {
    if value.is_nan() {
        return BigFraction::nan();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            BigFraction::neg_infinity()
        } else {
            BigFraction::infinity()
        };
    }
    // `Display` for `f64` never uses exponent notation.
    let text = value.abs().to_string();
    let (integer, fractional) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let digits = format!("{integer}{fractional}");
    let numerator = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default();
    let exponent = u32::try_from(fractional.len()).unwrap_or(u32::MAX);
    let denominator = BigUint::from(10u8).pow(exponent);
    if value.is_sign_negative() && numerator != BigUint::default() {
        BigFraction::new_neg(numerator, denominator)
    } else {
        BigFraction::new(numerator, denominator)
    }
}

/// Whether `value` is an exact integer multiple of `divisor`.
pub(crate) fn is_multiple_of(value: &BigFraction, divisor: &BigFraction) -> bool {
    let quotient = value.clone() / divisor.clone();
    quotient.denom() == Some(&BigUint::from(1u8))
}
