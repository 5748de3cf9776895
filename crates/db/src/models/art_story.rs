//! Artist story entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `art_stories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtStory {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub category: String,
    pub upvotes: i64,
    pub created_at: Timestamp,
}

/// DTO for submitting a story.
#[derive(Debug, Deserialize)]
pub struct CreateStory {
    pub title: String,
    pub body: String,
    pub category: Option<String>,
}

/// Query parameters for the story listing. `category=all` means no filter.
#[derive(Debug, Deserialize)]
pub struct StoryListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}
