//! Validation of raw user input.

use tracing::warn;

use crate::error::{Error, Result};

/// Parses a raw input field into a finite number.
///
/// Surrounding whitespace is ignored. Besides decimal and exponent forms,
/// unsigned `0x`, `0o` and `0b` integer literals are accepted. Blank input
/// fails with [`Error::EmptyInput`]; text that is not a number, or that
/// parses to NaN or an infinity, fails with [`Error::NonFiniteInput`].
///
/// # Examples
///
/// ```
/// use thermoconv_core::parse_value;
///
/// assert_eq!(parse_value(" 98.6 ").unwrap(), 98.6);
/// assert!(parse_value("   ").is_err());
/// assert!(parse_value("inf").is_err());
/// ```
pub fn parse_value(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        warn!("rejected empty input");
        return Err(Error::EmptyInput);
    }

    let parsed = parse_radix_integer(trimmed).or_else(|| trimmed.parse::<f64>().ok());
    match parsed {
        Some(value) if value.is_finite() => Ok(value),
        _ => {
            warn!(raw = trimmed, "rejected non-finite input");
            Err(Error::NonFiniteInput {
                raw: trimmed.to_string(),
            })
        }
    }
}

// Digits accumulate in f64 so long literals lose precision instead of failing.
fn parse_radix_integer(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
