//! Presentation formatting.
//!
//! Turns raw conversion results into display strings. These strings are for
//! people only; never parse them back for further computation.

use crate::types::Unit;

/// Rendered in place of a value that is NaN or infinite.
pub const INVALID: &str = "Invalid";

/// Sentence used when the source and target units are the same.
pub const NO_CONVERSION: &str = "No conversion required; units are identical.";

/// Values closer than this to an integer are shown as that integer.
const INTEGER_TOLERANCE: f64 = 1e-9;

/// Maximum number of fractional digits shown.
const DISPLAY_DECIMALS: usize = 6;

/// Formats a number for display.
///
/// Non-finite values render as `"Invalid"`. Values within `1e-9` of an
/// integer render as that integer. Everything else is rounded to six decimal
/// places with trailing zeros removed.
///
/// # Examples
///
/// ```
/// use thermoconv_core::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(3.14159265), "3.141593");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(f64::INFINITY), "Invalid");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return INVALID.to_string();
    }

    let nearest = value.round();
    if (value - nearest).abs() < INTEGER_TOLERANCE {
        return without_negative_zero(nearest.to_string());
    }

    let fixed = format!("{value:.prec$}", prec = DISPLAY_DECIMALS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    without_negative_zero(trimmed.to_string())
}

// "-0" shows up for tiny negatives; display it as plain zero.
fn without_negative_zero(s: String) -> String {
    if s == "-0" { "0".to_string() } else { s }
}

/// Formats a value followed by its unit symbol, e.g. `"32 °F"`.
pub fn format_reading(value: f64, unit: Unit) -> String {
    format!("{} {}", format_number(value), unit.symbol())
}

/// The formula used for an ordered pair of distinct units.
///
/// Returns `None` when `from == to`.
pub fn formula(from: Unit, to: Unit) -> Option<&'static str> {
    match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => Some("F = C × 9/5 + 32"),
        (Unit::Celsius, Unit::Kelvin) => Some("K = C + 273.15"),
        (Unit::Fahrenheit, Unit::Celsius) => Some("C = (F − 32) × 5/9"),
        (Unit::Fahrenheit, Unit::Kelvin) => Some("K = (F − 32) × 5/9 + 273.15"),
        (Unit::Kelvin, Unit::Celsius) => Some("C = K − 273.15"),
        (Unit::Kelvin, Unit::Fahrenheit) => Some("F = (K − 273.15) × 9/5 + 32"),
        _ => None,
    }
}

/// Describes a conversion as a sentence.
///
/// # Examples
///
/// ```
/// use thermoconv_core::{describe_equation, Unit};
///
/// assert_eq!(
///     describe_equation(0.0, Unit::Celsius, 32.0, Unit::Fahrenheit),
///     "0 °C → 32 °F (F = C × 9/5 + 32)"
/// );
/// ```
pub fn describe_equation(input: f64, from: Unit, output: f64, to: Unit) -> String {
    match formula(from, to) {
        Some(formula) => format!(
            "{} → {} ({formula})",
            format_reading(input, from),
            format_reading(output, to)
        ),
        None => NO_CONVERSION.to_string(),
    }
}
