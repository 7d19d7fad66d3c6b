//! Error types for thermoconv-cli

use thiserror::Error;

/// Result type alias for thermoconv-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in thermoconv-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from thermoconv-core
    #[error("Core error: {0}")]
    Core(#[from] thermoconv_core::Error),

    /// Error from thermoconv-api
    #[error("API error: {0}")]
    Api(#[from] thermoconv_api::Error),

    /// Writing output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The message printed for this error before exiting.
    pub fn user_message(&self) -> String {
        match self {
            Error::Core(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_uses_user_message() {
        let err = Error::from(thermoconv_core::Error::EmptyInput);
        assert_eq!(err.user_message(), "Please enter a numeric value to convert.");
    }

    #[test]
    fn test_io_error_message() {
        let err = Error::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.user_message(), "Output error: broken pipe");
    }
}
