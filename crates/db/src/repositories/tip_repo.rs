//! Repository for the `tips` table.

use herframe_core::tip::DEFAULT_CATEGORY;
use herframe_core::types::DbId;
use sqlx::PgPool;

use crate::models::tip::{CreateTip, Tip};

/// Column list shared across queries.
const COLUMNS: &str = "id, body, category, upvotes, created_at";

/// Provides CRUD operations for community tips.
pub struct TipRepo;

impl TipRepo {
    /// Insert a new tip, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateTip) -> Result<Tip, sqlx::Error> {
        let query = format!(
            "INSERT INTO tips (body, category) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tip>(&query)
            .bind(&input.body)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .fetch_one(pool)
            .await
    }

    /// List tips, optionally filtered by category, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Tip>, sqlx::Error> {
        let query = if category.is_some() {
            format!(
                "SELECT {COLUMNS} FROM tips WHERE category = $1 \
                 ORDER BY created_at DESC, id DESC LIMIT $2"
            )
        } else {
            format!("SELECT {COLUMNS} FROM tips ORDER BY created_at DESC, id DESC LIMIT $1")
        };

        let mut stmt = sqlx::query_as::<_, Tip>(&query);
        if let Some(c) = category {
            stmt = stmt.bind(c);
        }
        stmt = stmt.bind(limit);

        stmt.fetch_all(pool).await
    }

    /// Atomically increment a tip's upvote count. Returns the updated
    /// row if found.
    pub async fn upvote(pool: &PgPool, id: DbId) -> Result<Option<Tip>, sqlx::Error> {
        let query = format!(
            "UPDATE tips SET upvotes = upvotes + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
