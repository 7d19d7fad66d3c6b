//! Route handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thermoconv_core::{ConversionRequest, Outcome, handle_request};
use tracing::{info, warn};

use crate::{Error, Result};

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Metadata shared with handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    name: String,
    version: String,
}

impl AppState {
    /// Creates handler state with server metadata.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Builds the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/convert", post(convert))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: state.name,
        version: state.version,
    })
}

async fn convert(
    payload: std::result::Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Json<Outcome>> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("malformed conversion request: {rejection}");
        Error::from(rejection)
    })?;
    match handle_request(&request) {
        Ok(outcome) => {
            info!(from = %request.from, to = %request.to, "conversion served");
            Ok(Json(outcome))
        }
        Err(e) => {
            warn!(kind = e.kind(), "conversion rejected: {e}");
            Err(e.into())
        }
    }
}
