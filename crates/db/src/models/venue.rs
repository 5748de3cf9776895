//! Venue entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `venues` table.
///
/// The three `avg_*` fields and `total_ratings` are derived from
/// `venue_ratings` and are only written by the rating aggregation;
/// `total_incidents` is only written by the incident counter.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub category: String,
    pub avg_safety: f64,
    pub avg_fair_pay: f64,
    pub avg_respect: f64,
    pub total_ratings: i64,
    pub total_incidents: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue (seed/admin path; there is no public create
/// endpoint).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenue {
    pub name: String,
    pub address: String,
    pub city: String,
    pub category: Option<String>,
}

/// Query parameters for the venue directory listing.
#[derive(Debug, Deserialize)]
pub struct VenueListParams {
    /// Free-text search over name and city.
    pub q: Option<String>,
    /// Case-insensitive city substring filter.
    pub city: Option<String>,
}
