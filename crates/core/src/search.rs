//! Text-search helpers and pagination clamping for the list endpoints.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and any future CLI tooling.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Maximum venues returned by the directory listing.
pub const VENUE_LIST_LIMIT: i64 = 50;

/// Maximum ratings / incidents returned per venue.
pub const VENUE_CHILD_LIST_LIMIT: i64 = 50;

/// Maximum tips returned by the tip listing.
pub const TIP_LIST_LIMIT: i64 = 100;

/// Maximum stories / opportunities returned by their listings.
pub const FEED_LIST_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Sanitize user input into a list of terms suitable for tsquery
/// construction.
///
/// - Splits on whitespace.
/// - Strips non-alphanumeric characters (except `_`) from each term.
/// - Drops empty terms.
///
/// Returns `None` if the input yields no usable terms.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Sanitize and convert user input into a PostgreSQL `tsquery` string.
///
/// - Whitespace-separated terms are joined with `&` (AND).
/// - Empty or whitespace-only input returns `None`.
/// - Special characters that could break tsquery parsing are stripped.
pub fn build_tsquery(query: &str) -> Option<String> {
    sanitize_terms(query).map(|terms| terms.join(" & "))
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
