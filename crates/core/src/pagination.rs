//! Page size handling shared by every listing endpoint.

/// Page size when the caller sends no `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound on any single page.
pub const MAX_LIMIT: i64 = 10_000;

/// Page size for a `limit` query parameter.
///
/// A missing limit means [`DEFAULT_LIMIT`]. `limit=0` reads the whole
/// listing and yields `None`, which binds as `LIMIT NULL` (no limit). Any
/// other value is clamped to `[1, MAX_LIMIT]`.
pub fn page_limit(limit: Option<i64>) -> Option<i64> {
    match limit {
        None => Some(DEFAULT_LIMIT),
        Some(0) => None,
        Some(n) => Some(n.clamp(1, MAX_LIMIT)),
    }
}
