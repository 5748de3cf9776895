//! Repository for the `venue_ratings` table and the venue aggregate
//! recompute.

use herframe_core::rating::round_to_tenth;
use herframe_core::search::VENUE_CHILD_LIST_LIMIT;
use herframe_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue_rating::{CreateRating, RatingAggregate, VenueRating};

/// Column list shared across queries.
const COLUMNS: &str = "id, venue_id, safety, fair_pay, respect, comment, created_at";

/// Provides rating submission and retrieval.
pub struct VenueRatingRepo;

impl VenueRatingRepo {
    /// Insert a rating and bring the venue's aggregate fields up to date,
    /// in one transaction.
    ///
    /// The aggregates are recomputed over ALL ratings for the venue
    /// rather than adjusted incrementally: the recompute self-heals any
    /// prior inconsistency and cannot accumulate floating-point drift.
    /// Running insert and recompute in the same transaction keeps
    /// concurrent submissions from ever publishing an undercounted
    /// aggregate.
    pub async fn create_with_aggregates(
        pool: &PgPool,
        venue_id: DbId,
        input: &CreateRating,
    ) -> Result<VenueRating, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO venue_ratings (venue_id, safety, fair_pay, respect, comment) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let rating = sqlx::query_as::<_, VenueRating>(&insert)
            .bind(venue_id)
            .bind(input.safety)
            .bind(input.fair_pay)
            .bind(input.respect)
            .bind(input.comment.as_deref().unwrap_or(""))
            .fetch_one(&mut *tx)
            .await?;

        let agg: (f64, f64, f64, i64) = sqlx::query_as(
            "SELECT COALESCE(AVG(safety)::float8, 0.0), \
                    COALESCE(AVG(fair_pay)::float8, 0.0), \
                    COALESCE(AVG(respect)::float8, 0.0), \
                    COUNT(*) \
             FROM venue_ratings WHERE venue_id = $1",
        )
        .bind(venue_id)
        .fetch_one(&mut *tx)
        .await?;

        let aggregate = RatingAggregate {
            avg_safety: agg.0,
            avg_fair_pay: agg.1,
            avg_respect: agg.2,
            count: agg.3,
        };

        sqlx::query(
            "UPDATE venues \
             SET avg_safety = $1, avg_fair_pay = $2, avg_respect = $3, \
                 total_ratings = $4, updated_at = NOW() \
             WHERE id = $5",
        )
        .bind(round_to_tenth(aggregate.avg_safety))
        .bind(round_to_tenth(aggregate.avg_fair_pay))
        .bind(round_to_tenth(aggregate.avg_respect))
        .bind(aggregate.count)
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rating)
    }

    /// List the most recent ratings for a venue, newest first.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueRating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM venue_ratings \
             WHERE venue_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, VenueRating>(&query)
            .bind(venue_id)
            .bind(VENUE_CHILD_LIST_LIMIT)
            .fetch_all(pool)
            .await
    }
}
