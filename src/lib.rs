//! Backend proxy for a Giphy-powered GIF browser frontend.
//!
//! The service forwards paginated trending and search requests to the Giphy
//! API, decodes the response into typed structures, and serves the result
//! back to the browser as JSON. Requests pass through panic recovery, CORS,
//! and a logging/metrics layer on the way in.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`pagination`]: Page/limit to offset normalization
//! - [`giphy`]: Typed Giphy API client
//! - [`api`]: HTTP handlers, routes, and middleware
//! - [`metrics`]: Prometheus metric helpers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod giphy;
pub mod metrics;
pub mod pagination;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, GiphyError, Result};
