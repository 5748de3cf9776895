//! Repository for the `venues` table.

use herframe_core::search::build_tsquery;
use herframe_core::types::DbId;
use herframe_core::venue::DEFAULT_CATEGORY;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, Venue};

/// Column list shared across queries.
const COLUMNS: &str = "\
    id, name, address, city, category, \
    avg_safety, avg_fair_pay, avg_respect, \
    total_ratings, total_incidents, created_at, updated_at";

/// Provides CRUD operations for venues.
///
/// Aggregate fields are not written here: the rating recompute lives in
/// [`crate::repositories::VenueRatingRepo`] and the incident counter in
/// [`crate::repositories::IncidentReportRepo`], so each derived field has
/// exactly one writer.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue (seed/admin path), returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, address, city, category) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .fetch_one(pool)
            .await
    }

    /// Find a venue by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List venues with optional text-search and city filters.
    ///
    /// Results are ordered by rating volume (most-rated first), matching
    /// the directory's "most vetted venues on top" presentation.
    pub async fn list_filtered(
        pool: &PgPool,
        q: Option<&str>,
        city: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Venue>, sqlx::Error> {
        // Empty or unusable search input degrades to no text filter.
        let tsquery = q.and_then(build_tsquery);

        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if tsquery.is_some() {
            conditions.push(format!(
                "to_tsvector('english', name || ' ' || city) @@ to_tsquery('english', ${param_idx})"
            ));
            param_idx += 1;
        }
        if city.is_some() {
            conditions.push(format!("city ILIKE '%' || ${param_idx} || '%'"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM venues {where_clause} \
             ORDER BY total_ratings DESC, id ASC \
             LIMIT ${param_idx}"
        );

        let mut stmt = sqlx::query_as::<_, Venue>(&query);
        if let Some(ts) = &tsquery {
            stmt = stmt.bind(ts);
        }
        if let Some(c) = city {
            stmt = stmt.bind(c);
        }
        stmt = stmt.bind(limit);

        stmt.fetch_all(pool).await
    }
}
