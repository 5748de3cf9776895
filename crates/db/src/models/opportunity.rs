//! Opportunity listing entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `opportunities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: DbId,
    pub title: String,
    pub artist_name: String,
    pub description: String,
    pub story: String,
    pub medium: String,
    pub image_url: String,
    pub price: String,
    pub negotiable: bool,
    pub created_at: Timestamp,
}

/// DTO for posting an opportunity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpportunity {
    pub title: String,
    pub artist_name: String,
    pub description: String,
    pub story: Option<String>,
    pub medium: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub negotiable: Option<bool>,
}

/// Query parameters for the opportunity listing. `medium=all` means no
/// filter; `q` is a case-insensitive title/description substring search.
#[derive(Debug, Deserialize)]
pub struct OpportunityListParams {
    pub medium: Option<String>,
    pub q: Option<String>,
    pub limit: Option<i64>,
}
