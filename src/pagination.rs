//! Normalization of raw pagination query parameters.
//!
//! The frontend sends a 1-based `page` and a `limit`; Giphy wants a
//! zero-based `offset`. Invalid or absent input silently falls back to the
//! defaults rather than being rejected.

/// Default page size when `limit` is absent or unparseable.
pub const DEFAULT_LIMIT: u32 = 12;

/// Default page number when `page` is absent or unparseable.
pub const DEFAULT_PAGE: u32 = 1;

/// Normalized pagination parameters, ready for the upstream query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Number of items per page (>= 1).
    pub limit: u32,
    /// Zero-based index of the first item: `(page - 1) * limit`.
    pub offset: u32,
}

/// Normalize raw `limit` and `page` query strings into [`PageParams`].
///
/// Anything that does not parse as a base-10 integer >= 1 is replaced by the
/// default. Never fails.
pub fn normalize(raw_limit: Option<&str>, raw_page: Option<&str>) -> PageParams {
    let limit = parse_positive(raw_limit).unwrap_or(DEFAULT_LIMIT);
    let page = parse_positive(raw_page).unwrap_or(DEFAULT_PAGE);

    PageParams {
        limit,
        offset: (page - 1).saturating_mul(limit),
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw?.parse::<u32>().ok().filter(|v| *v >= 1)
}
