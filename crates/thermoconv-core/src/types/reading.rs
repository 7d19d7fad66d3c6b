//! Temperature readings and conversion results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Unit;
use crate::convert::convert;
use crate::error::{Error, Result};
use crate::format::{describe_equation, format_reading};

/// A finite value on a particular scale.
///
/// Readings are immutable; converting one produces a new reading.
/// Deserializing goes through [`Reading::new`], so NaN and infinities are
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReading")]
pub struct Reading {
    value: f64,
    unit: Unit,
}

#[derive(Deserialize)]
struct RawReading {
    value: f64,
    unit: Unit,
}

impl TryFrom<RawReading> for Reading {
    type Error = Error;

    fn try_from(raw: RawReading) -> Result<Self> {
        Reading::new(raw.value, raw.unit)
    }
}

impl Reading {
    /// Creates a reading, rejecting NaN and infinities.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermoconv_core::{Reading, Unit};
    ///
    /// let boiling = Reading::new(100.0, Unit::Celsius).unwrap();
    /// assert_eq!(boiling.to_string(), "100 °C");
    /// assert!(Reading::new(f64::NAN, Unit::Celsius).is_err());
    /// ```
    pub fn new(value: f64, unit: Unit) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::non_finite_input(value));
        }
        Ok(Self { value, unit })
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Converts this reading to another unit.
    pub fn convert_to(&self, unit: Unit) -> Result<Conversion> {
        let value = convert(self.value, self.unit, unit)?;
        let output = Reading { value, unit };
        Ok(Conversion {
            input: *self,
            output,
            equation: describe_equation(self.value, self.unit, value, unit),
        })
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_reading(self.value, self.unit))
    }
}

/// The result of converting a [`Reading`]: the reading in the target unit
/// plus a sentence describing the formula applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    input: Reading,
    output: Reading,
    equation: String,
}

impl Conversion {
    /// The reading that was converted.
    pub fn input(&self) -> Reading {
        self.input
    }

    /// The converted reading. Its value is always finite.
    pub fn output(&self) -> Reading {
        self.output
    }

    /// The equation sentence, e.g. `0 °C → 32 °F (F = C × 9/5 + 32)`.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// The formatted output reading, e.g. `32 °F`.
    pub fn display(&self) -> String {
        self.output.to_string()
    }
}
