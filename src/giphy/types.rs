//! Wire types for the Giphy API.
//!
//! Field names match Giphy's JSON exactly, so the same types decode the
//! upstream body and re-encode the response served to the frontend.

use serde::{Deserialize, Serialize};

/// A single image URL for a specific GIF variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifImage {
    /// Direct URL of the image file.
    pub url: String,
}

/// Size/format variants for a GIF.
///
/// Only the `fixed_height` variant is used by the frontend grid; other
/// variants in the upstream body are dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifImages {
    /// The fixed-height rendition.
    pub fixed_height: GifImage,
}

/// One GIF item returned by the Giphy API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    /// Unique identifier for this GIF.
    pub id: String,
    /// Descriptive title.
    pub title: String,
    /// Image variants.
    pub images: GifImages,
}

/// Paging metadata for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of GIFs matching the query.
    pub total_count: u64,
    /// Number of GIFs in this response.
    pub count: u64,
    /// Zero-based index of the first GIF in this page.
    pub offset: u64,
}

/// Top-level Giphy response: the GIF list plus paging metadata.
///
/// Item order is upstream order and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifCollection {
    /// The GIF items for this page.
    pub data: Vec<Gif>,
    /// Paging metadata for `data`.
    pub pagination: Pagination,
}
