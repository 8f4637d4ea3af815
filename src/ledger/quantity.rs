//! Quantity coercion shared by reconciliation and the quantity inputs.
//!
//! Quantities are whole numbers of at least 1. Anything that is not a
//! positive integer degrades to 1 instead of failing.

use serde_json::Value;

/// Parses quantity text the way a number input reports it.
///
/// Leading whitespace and a `+` sign are accepted, parsing stops at the first
/// non-digit (`"2.7"` is 2), and values that are negative, zero or not numeric
/// become 1. Values past `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return 1;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 1;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

/// Coerces a loosely typed JSON quantity.
pub fn coerce_quantity(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(whole) => u32::try_from(whole).unwrap_or(u32::MAX).max(1),
            None => match n.as_f64() {
                Some(f) if f.is_finite() && f >= 1.0 => f.trunc().min(f64::from(u32::MAX)) as u32,
                _ => 1,
            },
        },
        Some(Value::String(s)) => parse_quantity(s),
        _ => 1,
    }
}
