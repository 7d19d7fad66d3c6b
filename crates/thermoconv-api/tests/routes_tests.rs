//! Router tests driven through `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use thermoconv_api::{ErrorBody, HealthResponse, Server};
use thermoconv_core::{Outcome, Unit};
use tower::ServiceExt;

async fn post_convert(body: Value) -> (StatusCode, Vec<u8>) {
    post_raw(body.to_string()).await
}

async fn post_raw(body: String) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let resp = Server::default().router().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_health() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = Server::default().router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.name, "thermoconv-api");
}

#[tokio::test]
async fn test_convert_success() {
    let (status, bytes) = post_convert(json!({"value": "0", "from": "C", "to": "F"})).await;
    assert_eq!(status, StatusCode::OK);

    let outcome: Outcome = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(outcome.value, 32.0);
    assert_eq!(outcome.unit, Unit::Fahrenheit);
    assert_eq!(outcome.display, "32 °F");
    assert_eq!(outcome.equation, "0 °C → 32 °F (F = C × 9/5 + 32)");
}

#[tokio::test]
async fn test_convert_empty_value() {
    let (status, bytes) = post_convert(json!({"value": "  ", "from": "C", "to": "K"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "empty_input");
    assert_eq!(body.message, "Please enter a numeric value to convert.");
}

#[tokio::test]
async fn test_convert_missing_value_is_empty_input() {
    let (status, bytes) = post_convert(json!({"from": "C", "to": "K"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "empty_input");
}

#[tokio::test]
async fn test_convert_non_finite_value() {
    let (status, bytes) = post_convert(json!({"value": "Infinity", "from": "C", "to": "K"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "non_finite_input");
    assert_eq!(body.message, "Please enter a valid finite number.");
}

#[tokio::test]
async fn test_convert_unknown_unit() {
    let (status, bytes) = post_convert(json!({"value": "1", "from": "X", "to": "C"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "unknown_unit");
    assert_eq!(body.message, "Conversion error: Unknown unit: X");
}

#[tokio::test]
async fn test_convert_malformed_json() {
    let (status, bytes) = post_raw("{\"value\": \"1\",".to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "invalid_request");
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_convert_wrong_field_type() {
    let (status, bytes) = post_convert(json!({"value": "1", "from": 5, "to": "C"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "invalid_request");
}
