//! End-to-end tests for the GIF proxy against a stubbed Giphy upstream.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use httpmock::Method::GET;
use httpmock::MockServer;
use metrics_exporter_prometheus::PrometheusBuilder;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use gif_proxy::api::middleware::handle_panic;
use gif_proxy::api::{create_router, AppState};
use gif_proxy::config::Config;
use gif_proxy::giphy::GiphyClient;

const SAMPLE_BODY: &str = r#"{"data":[{"id":"abc123","title":"Test GIF","images":{"fixed_height":{"url":"https://example.com/1.gif"}}}],"pagination":{"total_count":1,"count":1,"offset":0}}"#;

fn test_config(api_key: &str, base_url: &str) -> Config {
    Config {
        giphy_api_key: api_key.to_string(),
        giphy_base_url: base_url.to_string(),
        port: 5050,
        cors_allow_origin: "http://localhost:3000".to_string(),
        http_timeout_ms: 2_000,
    }
}

fn test_app(api_key: &str, base_url: &str) -> Router {
    let config = test_config(api_key, base_url);
    let handle = PrometheusBuilder::new().build_recorder().handle();
    create_router(AppState::new(Arc::new(config), handle))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn trending_proxies_stubbed_upstream() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/trending")
            .query_param("api_key", "test-key")
            .query_param("limit", "10")
            .query_param("offset", "20");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_BODY);
    });

    let app = test_app("test-key", &upstream.base_url());
    let (status, body) = get_json(app, "/api/trending?limit=10&page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "abc123");
    assert_eq!(body["data"][0]["title"], "Test GIF");
    assert_eq!(
        body["data"][0]["images"]["fixed_height"]["url"],
        "https://example.com/1.gif"
    );
    assert_eq!(body["pagination"]["total_count"], 1);
    mock.assert();
}

#[tokio::test]
async fn trending_applies_default_pagination() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/trending")
            .query_param("limit", "12")
            .query_param("offset", "0");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_BODY);
    });

    // Non-numeric pagination silently falls back to the defaults.
    let app = test_app("test-key", &upstream.base_url());
    let (status, _) = get_json(app, "/api/trending?limit=lots&page=soon").await;

    assert_eq!(status, StatusCode::OK);
    mock.assert();
}

#[tokio::test]
async fn search_forwards_term_and_filters() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("api_key", "test-key")
            .query_param("q", "space cats")
            .query_param("rating", "g")
            .query_param("lang", "en")
            .query_param("limit", "12")
            .query_param("offset", "0");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_BODY);
    });

    let app = test_app("test-key", &upstream.base_url());
    let (status, body) =
        get_json(app, "/api/search?q=space%20cats&rating=g&lang=en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "abc123");
    mock.assert();
}

#[tokio::test]
async fn search_omits_empty_filters() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "cats")
            .query_param_missing("rating")
            .query_param_missing("lang");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_BODY);
    });

    let app = test_app("test-key", &upstream.base_url());
    let (status, _) = get_json(app, "/api/search?q=cats&rating=&lang=").await;

    assert_eq!(status, StatusCode::OK);
    mock.assert();
}

#[tokio::test]
async fn search_without_term_never_calls_upstream() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body(SAMPLE_BODY);
    });

    let app = test_app("test-key", &upstream.base_url());
    let (status, body) = get_json(app, "/api/search?q=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query param 'q' is required");
    mock.assert_calls(0);
}

#[tokio::test]
async fn missing_credential_never_calls_upstream() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET);
        then.status(200).body(SAMPLE_BODY);
    });

    let app = test_app("", &upstream.base_url());
    let (status, body) = get_json(app.clone(), "/api/trending").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server misconfigured: missing GIPHY_API_KEY");

    let (status, body) = get_json(app, "/api/search?q=cats").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server misconfigured: missing GIPHY_API_KEY");

    mock.assert_calls(0);
}

#[tokio::test]
async fn upstream_network_failure_yields_generic_500() {
    // Nothing listens on port 1; the connect fails immediately.
    let app = test_app("test-key", "http://127.0.0.1:1");
    let (status, body) = get_json(app, "/api/trending").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch GIFs");
}

#[tokio::test]
async fn undecodable_upstream_body_yields_generic_500_without_retry() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET).path("/trending");
        then.status(200)
            .header("content-type", "application/json")
            .body("not json at all");
    });

    let app = test_app("test-key", &upstream.base_url());
    let (status, body) = get_json(app, "/api/trending").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch GIFs");
    // Exactly one call: failures are never retried.
    mock.assert_calls(1);
}

#[tokio::test]
async fn client_fetch_trending_decodes_stub() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/trending")
            .query_param("limit", "5")
            .query_param("offset", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_BODY);
    });

    let config = test_config("test-key", &upstream.base_url());
    let client = GiphyClient::new(&config);
    let collection = client.fetch_trending(5, 1).await.unwrap();

    assert_eq!(collection.data.len(), 1);
    assert_eq!(collection.data[0].id, "abc123");
    assert_eq!(collection.data[0].title, "Test GIF");
    assert_eq!(
        collection.data[0].images.fixed_height.url,
        "https://example.com/1.gif"
    );
    assert_eq!(collection.pagination.total_count, 1);
    mock.assert();
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let app = test_app("test-key", "http://127.0.0.1:1");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}

async fn exploding_handler() {
    panic!("handler blew up")
}

#[tokio::test]
async fn panicking_handler_is_recovered_as_500_json() {
    // A throwaway route wired through the same panic recovery layer the
    // real router uses.
    let app = Router::new()
        .route("/explode", get(exploding_handler))
        .layer(CatchPanicLayer::custom(handle_panic));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/explode")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "internal server error" }));
}
