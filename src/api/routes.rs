//! HTTP API route definitions.

use axum::http::{header, HeaderValue, Method};
use axum::middleware as axum_middleware;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::Config;

use super::handlers::{expose_metrics, health, search, trending, AppState};
use super::middleware::{handle_panic, track_requests};

/// Create the API router with the full middleware stack.
///
/// Layer order matches the original service: panic recovery outermost, then
/// CORS, then logging/metrics around the handlers.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // health and readiness probes
        .route("/health", get(health))
        .route("/ready", get(health))
        // metrics endpoint
        .route("/metrics", get(expose_metrics))
        // API routes
        .route("/api/trending", get(trending))
        .route("/api/search", get(search))
        .layer(axum_middleware::from_fn(track_requests))
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// CORS policy restricting the frontend origin to GET/OPTIONS with a
/// content-type header.
fn cors_layer(config: &Config) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match config.cors_allow_origin.parse::<HeaderValue>() {
        Ok(origin) => cors = cors.allow_origin(origin),
        Err(_) => warn!(
            origin = %config.cors_allow_origin,
            "invalid CORS_ALLOW_ORIGIN, allowing no cross-origin requests"
        ),
    }

    cors
}
