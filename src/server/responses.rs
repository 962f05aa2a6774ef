//! # Response Bodies
//!
//! JSON bodies of the secret API and the mapping from [`SecretError`] to HTTP responses:
//!
//! - Validation: `400 {}`
//! - Not found: `404 {"data": ""}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::service::SecretError;

/// POST `/` body
#[derive(Debug, Deserialize)]
pub struct StoreRequest {
    #[serde(default)]
    pub plain_text: String,
}

/// POST `/` success body
#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub id: String,
}

/// GET `/{id}` body, also used (empty) for not-found
#[derive(Debug, Serialize)]
pub struct SecretDataResponse<'a> {
    pub data: &'a str,
}

impl IntoResponse for SecretError {
    fn into_response(self) -> Response {
        match self {
            SecretError::Validation => (StatusCode::BAD_REQUEST, Json(json!({}))).into_response(),
            SecretError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(SecretDataResponse { data: "" }),
            )
                .into_response(),
        }
    }
}
