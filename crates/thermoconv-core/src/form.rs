//! Converter form: request handling and session state.
//!
//! [`handle_request`] is the stateless entry point a front end calls with
//! the raw form fields. [`ConverterForm`] layers the interactive behavior on
//! top of it: the visible result, the error line, swapping and clearing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::input::parse_value;
use crate::types::{Conversion, Reading, Unit};

/// Raw form fields as submitted by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// The value text, unparsed
    #[serde(default)]
    pub value: String,
    /// Source unit token
    pub from: String,
    /// Target unit token
    pub to: String,
}

impl ConversionRequest {
    /// Creates a request from raw fields.
    pub fn new(
        value: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// What the front end shows after a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Converted value, unrounded
    pub value: f64,
    /// Target unit
    pub unit: Unit,
    /// Formatted result, e.g. `32 °F`
    pub display: String,
    /// Equation sentence
    pub equation: String,
}

impl From<Conversion> for Outcome {
    fn from(conversion: Conversion) -> Self {
        let output = conversion.output();
        Self {
            value: output.value(),
            unit: output.unit(),
            display: conversion.display(),
            equation: conversion.equation().to_string(),
        }
    }
}

/// Validates and converts one request.
///
/// The value is checked before the unit tokens.
pub fn handle_request(request: &ConversionRequest) -> Result<Outcome> {
    let value = parse_value(&request.value)?;
    let from: Unit = request.from.parse()?;
    let to: Unit = request.to.parse()?;

    let outcome = Outcome::from(Reading::new(value, from)?.convert_to(to)?);
    info!(input = value, %from, %to, display = %outcome.display, "handled conversion request");
    Ok(outcome)
}

/// Interactive converter state.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterForm {
    value: String,
    from: Unit,
    to: Unit,
    default_from: Unit,
    default_to: Unit,
    result: Option<Outcome>,
    error: Option<String>,
}

impl ConverterForm {
    /// Creates an empty form converting Celsius to Fahrenheit.
    pub fn new() -> Self {
        Self::with_units(Unit::Celsius, Unit::Fahrenheit)
    }

    /// Creates an empty form with the given default units.
    ///
    /// [`clear`](Self::clear) returns the form to these units.
    pub fn with_units(from: Unit, to: Unit) -> Self {
        Self {
            value: String::new(),
            from,
            to,
            default_from: from,
            default_to: to,
            result: None,
            error: None,
        }
    }

    /// The current value text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The selected source unit.
    pub fn from(&self) -> Unit {
        self.from
    }

    /// The selected target unit.
    pub fn to(&self) -> Unit {
        self.to
    }

    /// The visible result, if any.
    pub fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    /// The visible error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the value text.
    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
    }

    /// Selects the source unit.
    pub fn set_from(&mut self, unit: Unit) {
        self.from = unit;
    }

    /// Selects the target unit.
    pub fn set_to(&mut self, unit: Unit) {
        self.to = unit;
    }

    /// The form's fields as a request.
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.value.clone(), self.from.token(), self.to.token())
    }

    /// Converts the current fields.
    ///
    /// On success the result becomes visible and any error is cleared. On
    /// failure the result is hidden and the error's user message is shown.
    pub fn submit(&mut self) -> Result<&Outcome> {
        self.error = None;
        match handle_request(&self.request()) {
            Ok(outcome) => Ok(self.result.insert(outcome)),
            Err(err) => {
                self.result = None;
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Exchanges the source and target units.
    ///
    /// When a result is visible its unrounded value becomes the new input,
    /// so converting back reproduces the original value rather than the
    /// rounded display.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        if let Some(result) = &self.result {
            self.value = result.value.to_string();
        }
        debug!(from = %self.from, to = %self.to, value = %self.value, "swapped units");
    }

    /// Resets the form to an empty value and the default units.
    pub fn clear(&mut self) {
        self.value.clear();
        self.from = self.default_from;
        self.to = self.default_to;
        self.result = None;
        self.error = None;
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}
