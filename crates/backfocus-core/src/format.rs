//! Number formatting and lenient parsing for form values.

use crate::constants::{INCH_DIGITS, MM_PER_INCH, PLACEHOLDER};

/// Above 2^52 every `f64` is already an integer.
const MAX_EXACT_SCALED: f64 = 4_503_599_627_370_496.0;

/// Format a millimetre value with `digits` decimals.
///
/// Ties round away from zero (`10.25` gives `10.3`). Non-finite values
/// render as the placeholder, and a result that rounds to zero never prints
/// as `-0.00`.
#[must_use]
pub fn format_mm(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.digits$}", round_half_away(value, digits) + 0.0)
}

/// Round to `digits` decimals with ties away from zero.
///
/// Values too large to scale exactly are returned unchanged.
fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
        return value;
    }
    scaled.round() / scale
}

/// Convert millimetres to inches and format with three decimals.
#[must_use]
pub fn format_inches(value_mm: f64) -> String {
    format_inches_with(value_mm, INCH_DIGITS)
}

/// Convert millimetres to inches and format with `digits` decimals.
#[must_use]
pub fn format_inches_with(value_mm: f64, digits: usize) -> String {
    format_mm(value_mm / MM_PER_INCH, digits)
}

/// Shortest representation of a constant (`66` rather than `66.00`).
#[must_use]
pub fn format_constant(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value + 0.0)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Parse a form field as a finite number.
///
/// Empty, malformed and non-finite text yields `None`; callers treat that
/// as 0.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a form field, defaulting to 0.
#[must_use]
pub fn number_or_zero(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}
