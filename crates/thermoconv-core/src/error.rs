//! Error types for thermoconv-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while validating, converting, or configuring.
///
/// Every variant is scoped to a single request: nothing here is retried and
/// nothing is fatal to the process.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The raw input was empty or whitespace only.
    #[error("No value entered")]
    EmptyInput,

    /// The input did not parse to a finite number.
    #[error("Not a finite number: {raw:?}")]
    NonFiniteInput {
        /// The offending input, as received
        raw: String,
    },

    /// A unit token outside `C`, `F`, `K`.
    #[error("Unknown unit: {token}")]
    UnknownUnit {
        /// The unrecognized token
        token: String,
    },

    /// A finite input converted to a value that is not finite.
    #[error("Conversion of {value} overflowed to a non-finite result")]
    NonFiniteResult {
        /// The input value that overflowed
        value: f64,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error on a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for thermoconv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a non-finite input error from a parsed value.
    pub fn non_finite_input(value: f64) -> Self {
        Error::NonFiniteInput {
            raw: value.to_string(),
        }
    }

    /// Creates an unknown unit error.
    pub fn unknown_unit<S: Into<String>>(token: S) -> Self {
        Error::UnknownUnit {
            token: token.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns whether this error was caused by what the user entered.
    ///
    /// Input errors are reported back to the user; anything else points at
    /// the environment (config files, the filesystem).
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::EmptyInput => true,
            Error::NonFiniteInput { .. } => true,
            Error::UnknownUnit { .. } => true,
            Error::NonFiniteResult { .. } => true,
            Error::Config { .. } => false,
            Error::Io { .. } => false,
        }
    }

    /// Short, stable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::NonFiniteInput { .. } => "non_finite_input",
            Error::UnknownUnit { .. } => "unknown_unit",
            Error::NonFiniteResult { .. } => "non_finite_result",
            Error::Config { .. } => "config",
            Error::Io { .. } => "io",
        }
    }

    /// The message shown to the user when a request is rejected.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyInput => "Please enter a numeric value to convert.".to_string(),
            Error::NonFiniteInput { .. } => "Please enter a valid finite number.".to_string(),
            other if other.is_input_error() => format!("Conversion error: {other}"),
            other => other.to_string(),
        }
    }
}
