//! Conversion engine.
//!
//! Every conversion pivots through Celsius: the source value is mapped to
//! Celsius, then from Celsius to the target scale. Converting a unit to itself
//! skips the pivot entirely and returns the input bit-for-bit.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Unit;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit reading at the freezing point of water.
pub const FAHRENHEIT_FREEZING: f64 = 32.0;

/// Maps a value on `from` to Celsius.
///
/// Near the top of the `f64` range the Fahrenheit scale factor is applied
/// divide-first, so only a result that is itself out of range overflows.
pub fn to_celsius(value: f64, from: Unit) -> f64 {
    match from {
        Unit::Celsius => value,
        Unit::Fahrenheit => {
            let celsius = (value - FAHRENHEIT_FREEZING) * 5.0 / 9.0;
            if celsius.is_finite() {
                celsius
            } else {
                (value - FAHRENHEIT_FREEZING) / 9.0 * 5.0
            }
        }
        Unit::Kelvin => value - KELVIN_OFFSET,
    }
}

/// Maps a Celsius value onto `to`.
///
/// Overflow handling matches [`to_celsius`].
pub fn from_celsius(celsius: f64, to: Unit) -> f64 {
    match to {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => {
            let fahrenheit = celsius * 9.0 / 5.0 + FAHRENHEIT_FREEZING;
            if fahrenheit.is_finite() {
                fahrenheit
            } else {
                celsius / 5.0 * 9.0 + FAHRENHEIT_FREEZING
            }
        }
        Unit::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// Converts `value` from one unit to another.
///
/// Fails with [`Error::NonFiniteInput`] when `value` is NaN or infinite and
/// with [`Error::NonFiniteResult`] when the conversion overflows.
///
/// # Examples
///
/// ```
/// use thermoconv_core::{convert, Unit};
///
/// assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 32.0);
/// assert_eq!(convert(0.0, Unit::Celsius, Unit::Kelvin).unwrap(), 273.15);
/// ```
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::non_finite_input(value));
    }
    if from == to {
        return Ok(value);
    }

    let converted = from_celsius(to_celsius(value, from), to);
    if !converted.is_finite() {
        return Err(Error::NonFiniteResult { value });
    }

    debug!(value, %from, %to, converted, "converted temperature");
    Ok(converted)
}

/// Converts `value` between units named by their tokens (`C`, `F`, `K`).
///
/// Unknown tokens fail with [`Error::UnknownUnit`]; the source token is
/// checked first.
pub fn convert_tokens(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    convert(value, from, to)
}
