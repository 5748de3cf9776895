//! Community tip entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: DbId,
    pub body: String,
    pub category: String,
    pub upvotes: i64,
    pub created_at: Timestamp,
}

/// DTO for submitting a tip.
#[derive(Debug, Deserialize)]
pub struct CreateTip {
    pub body: String,
    pub category: Option<String>,
}

/// Query parameters for the tip listing. `category=all` means no filter.
#[derive(Debug, Deserialize)]
pub struct TipListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}
