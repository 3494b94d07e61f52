//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Giphy Credentials ===
    /// Giphy API key. Empty means unconfigured; handlers refuse to proxy.
    #[serde(default)]
    pub giphy_api_key: String,

    /// Base URL for the Giphy GIF endpoints.
    #[serde(default = "default_giphy_base_url")]
    pub giphy_base_url: String,

    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed by the CORS policy (the browser frontend).
    #[serde(default = "default_cors_origin")]
    pub cors_allow_origin: String,

    // === Upstream HTTP Client ===
    /// Timeout for upstream Giphy requests in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,
}

fn default_giphy_base_url() -> String {
    "https://api.giphy.com/v1/gifs".to_string()
}

fn default_port() -> u16 {
    5050
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.giphy_api_key.is_empty() {
            return Err("GIPHY_API_KEY is not set".to_string());
        }

        if self.giphy_base_url.is_empty() {
            return Err("GIPHY_BASE_URL must not be empty".to_string());
        }

        Ok(())
    }
}
