//! # Handlers
//!
//! - `POST /` - store a secret: `{"plain_text": "..."}` -> `{"id": "<hex>"}`
//! - `GET /{id}` - read a secret once: `{"data": "..."}`, then it is gone
//! - `GET /` - no id given, always not found
//! - `GET /healthcheck` - liveness probe
//! - `GET /metrics` - Prometheus metrics

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, warn};
use zeroize::Zeroizing;

use super::responses::{SecretDataResponse, StoreRequest, StoreResponse};
use super::AppState;
use crate::constants::{HEALTH_CHECK_RESPONSE, METHOD_NOT_ALLOWED_RESPONSE};
use crate::observability::metrics;
use crate::service::SecretError;

/// Store a secret
///
/// The body is decoded regardless of `Content-Type`. A body that is missing, is not
/// JSON, or has an empty `plain_text` is rejected with `400 {}`.
pub async fn store_secret(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoreResponse>, SecretError> {
    let request: StoreRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Request in wrong format: {}", e);
        metrics::increment_validation_failures();
        SecretError::Validation
    })?;

    let id = state
        .service
        .store(Zeroizing::new(request.plain_text))?;
    Ok(Json(StoreResponse { id }))
}

/// Read a secret exactly once
///
/// The id is taken from the raw request path, without percent-decoding.
pub async fn retrieve_secret(State(state): State<AppState>, uri: Uri) -> Response {
    let raw_id = uri.path().strip_prefix('/').unwrap_or_default();
    match state.service.retrieve(raw_id) {
        Ok(value) => Json(SecretDataResponse {
            data: value.as_str(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /` carries no id
pub async fn retrieve_without_id() -> SecretError {
    SecretError::NotFound
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_RESPONSE)
}

pub async fn health_check() -> &'static str {
    HEALTH_CHECK_RESPONSE
}

pub async fn metrics_handler() -> Response {
    match metrics::render_metrics() {
        Ok(body) => (
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render metrics: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render metrics").into_response()
        }
    }
}
