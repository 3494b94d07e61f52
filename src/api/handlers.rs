//! HTTP API handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ApiError;
use crate::giphy::{GifCollection, GiphyClient};
use crate::pagination;

/// Application state shared with handlers.
///
/// Immutable for the process lifetime; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// Upstream Giphy client.
    pub giphy: GiphyClient,
    /// Handle for rendering Prometheus exposition text.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state from config and an installed metrics recorder.
    pub fn new(config: Arc<Config>, metrics: PrometheusHandle) -> Self {
        let giphy = GiphyClient::new(&config);
        Self {
            config,
            giphy,
            metrics,
        }
    }
}

/// Raw pagination query parameters for `/api/trending`.
///
/// Kept as strings: non-numeric input falls back to defaults instead of
/// being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    /// Requested page size.
    pub limit: Option<String>,
    /// Requested 1-based page number.
    pub page: Option<String>,
}

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term. Required.
    pub q: Option<String>,
    /// Requested page size.
    pub limit: Option<String>,
    /// Requested 1-based page number.
    pub page: Option<String>,
    /// Optional content rating filter (e.g. "g").
    pub rating: Option<String>,
    /// Optional language filter (e.g. "en").
    pub lang: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus exposition handler.
pub async fn expose_metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}

/// `GET /api/trending` - proxy the Giphy trending feed.
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<GifCollection>, ApiError> {
    if state.config.giphy_api_key.is_empty() {
        return Err(ApiError::MissingCredential);
    }

    let params = pagination::normalize(query.limit.as_deref(), query.page.as_deref());
    let collection = state.giphy.fetch_trending(params.limit, params.offset).await?;

    Ok(Json(collection))
}

/// `GET /api/search` - proxy a Giphy search.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<GifCollection>, ApiError> {
    let term = match query.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::MissingParam("q")),
    };

    if state.config.giphy_api_key.is_empty() {
        return Err(ApiError::MissingCredential);
    }

    let params = pagination::normalize(query.limit.as_deref(), query.page.as_deref());
    let collection = state
        .giphy
        .search(
            term,
            non_empty(query.rating.as_deref()),
            non_empty(query.lang.as_deref()),
            params.limit,
            params.offset,
        )
        .await?;

    Ok(Json(collection))
}

/// Treat empty filter strings as absent, so they are left off the upstream
/// query entirely.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
