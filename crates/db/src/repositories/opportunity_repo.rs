//! Repository for the `opportunities` table.

use herframe_core::opportunity::{DEFAULT_MEDIUM, DEFAULT_PRICE};
use sqlx::PgPool;

use crate::models::opportunity::{CreateOpportunity, Opportunity};

/// Column list shared across queries.
const COLUMNS: &str = "\
    id, title, artist_name, description, story, medium, \
    image_url, price, negotiable, created_at";

/// Provides CRUD operations for opportunity listings.
pub struct OpportunityRepo;

impl OpportunityRepo {
    /// Insert a new opportunity, returning the full row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOpportunity,
    ) -> Result<Opportunity, sqlx::Error> {
        let query = format!(
            "INSERT INTO opportunities \
                (title, artist_name, description, story, medium, image_url, price, negotiable) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Opportunity>(&query)
            .bind(&input.title)
            .bind(&input.artist_name)
            .bind(&input.description)
            .bind(input.story.as_deref().unwrap_or(""))
            .bind(input.medium.as_deref().unwrap_or(DEFAULT_MEDIUM))
            .bind(input.image_url.as_deref().unwrap_or(""))
            .bind(input.price.as_deref().unwrap_or(DEFAULT_PRICE))
            .bind(input.negotiable.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// List opportunities with optional medium and substring-search
    /// filters, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        medium: Option<&str>,
        q: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Opportunity>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if medium.is_some() {
            conditions.push(format!("medium = ${param_idx}"));
            param_idx += 1;
        }
        if q.is_some() {
            conditions.push(format!(
                "(title ILIKE '%' || ${param_idx} || '%' \
                  OR description ILIKE '%' || ${param_idx} || '%')"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM opportunities {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${param_idx}"
        );

        let mut stmt = sqlx::query_as::<_, Opportunity>(&query);
        if let Some(m) = medium {
            stmt = stmt.bind(m);
        }
        if let Some(term) = q {
            stmt = stmt.bind(term);
        }
        stmt = stmt.bind(limit);

        stmt.fetch_all(pool).await
    }
}
