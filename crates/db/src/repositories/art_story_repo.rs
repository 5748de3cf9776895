//! Repository for the `art_stories` table.

use herframe_core::story::DEFAULT_CATEGORY;
use herframe_core::types::DbId;
use sqlx::PgPool;

use crate::models::art_story::{ArtStory, CreateStory};

/// Column list shared across queries.
const COLUMNS: &str = "id, title, body, category, upvotes, created_at";

/// Provides CRUD operations for artist stories.
pub struct ArtStoryRepo;

impl ArtStoryRepo {
    /// Insert a new story, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateStory) -> Result<ArtStory, sqlx::Error> {
        let query = format!(
            "INSERT INTO art_stories (title, body, category) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtStory>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .fetch_one(pool)
            .await
    }

    /// List stories, optionally filtered by category, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ArtStory>, sqlx::Error> {
        let query = if category.is_some() {
            format!(
                "SELECT {COLUMNS} FROM art_stories WHERE category = $1 \
                 ORDER BY created_at DESC, id DESC LIMIT $2"
            )
        } else {
            format!("SELECT {COLUMNS} FROM art_stories ORDER BY created_at DESC, id DESC LIMIT $1")
        };

        let mut stmt = sqlx::query_as::<_, ArtStory>(&query);
        if let Some(c) = category {
            stmt = stmt.bind(c);
        }
        stmt = stmt.bind(limit);

        stmt.fetch_all(pool).await
    }

    /// Atomically increment a story's upvote count. Returns the updated
    /// row if found.
    pub async fn upvote(pool: &PgPool, id: DbId) -> Result<Option<ArtStory>, sqlx::Error> {
        let query = format!(
            "UPDATE art_stories SET upvotes = upvotes + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtStory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
