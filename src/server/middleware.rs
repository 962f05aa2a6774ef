//! # Request Logging Middleware
//!
//! Logs method, URI and latency of every request and records request metrics.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::observability::metrics;

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    info!("[{}] {:?} {} {:?}", method, uri.to_string(), status, elapsed);
    metrics::observe_request(&method, status, elapsed.as_secs_f64());

    response
}
