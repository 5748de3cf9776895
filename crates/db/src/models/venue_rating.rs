//! Venue rating entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `venue_ratings` table. Immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRating {
    pub id: DbId,
    pub venue_id: DbId,
    pub safety: i16,
    pub fair_pay: i16,
    pub respect: i16,
    pub comment: String,
    pub created_at: Timestamp,
}

/// DTO for submitting a rating. The venue id comes from the URL path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRating {
    pub safety: i16,
    pub fair_pay: i16,
    pub respect: i16,
    pub comment: Option<String>,
}

/// Recomputed aggregate over all ratings of one venue, before rounding.
#[derive(Debug, Clone, Copy)]
pub struct RatingAggregate {
    pub avg_safety: f64,
    pub avg_fair_pay: f64,
    pub avg_respect: f64,
    pub count: i64,
}
