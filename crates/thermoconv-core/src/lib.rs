#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Thermoconv Core Library
//!
//! Temperature units, the conversion engine, presentation formatting, and
//! the converter form that ties them to raw user input.
//!
//! # Modules
//!
//! - [`convert`]: Celsius-pivot conversion engine
//! - [`format`]: Number formatting and equation sentences
//! - [`input`]: Validation of raw input text
//! - [`form`]: Request handling and interactive form state
//! - [`config`]: TOML configuration
//! - [`error`]: Error types and Result alias

pub mod config;
pub mod convert;
pub mod error;
pub mod form;
pub mod format;
pub mod input;
pub mod types;

// Re-exports for convenience
pub use config::ThermoConfig;
pub use convert::{convert, convert_tokens};
pub use error::{Error, Result};
pub use form::{ConversionRequest, ConverterForm, Outcome, handle_request};
pub use format::{describe_equation, format_number};
pub use input::parse_value;
pub use types::{Conversion, Reading, Unit};
