//! Giphy API client wrapper.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::GiphyError;
use crate::metrics;

use super::types::GifCollection;

/// Giphy API client.
///
/// Issues exactly one outbound GET per call; failures are surfaced to the
/// caller, never retried.
#[derive(Debug, Clone)]
pub struct GiphyClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the Giphy GIF endpoints.
    base_url: String,
    /// API key sent with every request. Not validated here; callers
    /// short-circuit before invoking the client when it is missing.
    api_key: String,
}

impl GiphyClient {
    /// Create a new Giphy client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(2_000))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.giphy_base_url.clone(),
            api_key: config.giphy_api_key.clone(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the trending GIF feed.
    #[instrument(skip(self))]
    pub async fn fetch_trending(&self, limit: u32, offset: u32) -> Result<GifCollection, GiphyError> {
        let url = format!("{}/trending", self.base_url);
        let params = [
            ("api_key", self.api_key.clone()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];

        let collection = self.get_collection("trending", &url, &params).await?;
        debug!(count = collection.data.len(), "fetched trending GIFs");
        Ok(collection)
    }

    /// Search GIFs by query term, with optional rating and language filters.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        rating: Option<&str>,
        lang: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<GifCollection, GiphyError> {
        let url = format!("{}/search", self.base_url);
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(rating) = rating {
            params.push(("rating", rating.to_string()));
        }
        if let Some(lang) = lang {
            params.push(("lang", lang.to_string()));
        }

        let collection = self.get_collection("search", &url, &params).await?;
        debug!(count = collection.data.len(), query, "searched GIFs");
        Ok(collection)
    }

    /// Issue one GET and decode the body, recording upstream metrics.
    async fn get_collection(
        &self,
        endpoint: &'static str,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<GifCollection, GiphyError> {
        metrics::inc_giphy_requests(endpoint);
        let start = Instant::now();

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                metrics::inc_giphy_failures(endpoint);
                GiphyError::Unavailable(e)
            })?;

        metrics::record_giphy_latency(start, endpoint);

        response.json::<GifCollection>().await.map_err(|e| {
            metrics::inc_giphy_failures(endpoint);
            GiphyError::Decode(e)
        })
    }
}
