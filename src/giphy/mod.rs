//! Typed client for the Giphy GIF API.
//!
//! This module handles:
//! - Wire types mirroring Giphy's JSON responses
//! - The HTTP client issuing trending/search calls

pub mod client;
pub mod types;

pub use client::GiphyClient;
pub use types::{Gif, GifCollection, GifImage, GifImages, Pagination};
