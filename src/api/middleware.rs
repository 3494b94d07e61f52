//! Request logging/metrics middleware and panic recovery.

use std::any::Any;
use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, Response, StatusCode};
use axum::middleware::Next;
use tracing::{error, info};

use crate::metrics;

/// Log and instrument every request.
///
/// Runs the inner service, then reads the status off the finished response.
pub async fn track_requests(request: Request, next: Next) -> axum::response::Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    info!(
        method = %method,
        path = %path,
        status,
        duration,
        "handled request"
    );
    metrics::record_http_request(method.as_str(), &path, status, duration);

    response
}

/// Convert a recovered panic into a generic 500 JSON response.
///
/// Used with `CatchPanicLayer::custom`; the panic never reaches the
/// transport layer.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    error!(panic = detail, "panic recovered in handler");

    let body = serde_json::json!({ "error": "internal server error" });
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("static response must build")
}
