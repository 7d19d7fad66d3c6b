//! Error types for thermoconv-api

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for thermoconv-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in thermoconv-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from thermoconv-core
    #[error("Core error: {0}")]
    Core(#[from] thermoconv_core::Error),

    /// Request body was not a valid conversion request
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),

    /// Failed to bind or serve
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON body returned for a failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind, e.g. `unknown_unit`
    pub error: String,
    /// Message suitable for showing to the user
    pub message: String,
}

impl Error {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(e) if e.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON body for this error.
    pub fn body(&self) -> ErrorBody {
        match self {
            Error::Core(e) => ErrorBody {
                error: e.kind().to_string(),
                message: e.user_message(),
            },
            Error::InvalidRequest(rejection) => ErrorBody {
                error: "invalid_request".to_string(),
                message: rejection.body_text(),
            },
            Error::Io(e) => ErrorBody {
                error: "io".to_string(),
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
