//! Temperature scales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A temperature scale, identified by a one-letter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Degrees Celsius (`C`)
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit (`F`)
    #[serde(rename = "F")]
    Fahrenheit,
    /// Kelvin (`K`)
    #[serde(rename = "K")]
    Kelvin,
}

impl Unit {
    /// All supported units, in token order.
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    /// The input token for this unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermoconv_core::Unit;
    ///
    /// assert_eq!(Unit::Kelvin.token(), "K");
    /// ```
    pub fn token(self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
            Unit::Kelvin => "K",
        }
    }

    /// The display symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    /// The scale's name in lower case.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(Unit::Celsius),
            "F" => Ok(Unit::Fahrenheit),
            "K" => Ok(Unit::Kelvin),
            _ => Err(Error::unknown_unit(s)),
        }
    }
}
