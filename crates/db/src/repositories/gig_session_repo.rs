//! Repository for the `gig_sessions` table.
//!
//! Sessions are addressed by the client-generated `session_id`, never by
//! the internal BIGSERIAL key. The server only records client-asserted
//! state; there is no sweep that expires rows.

use herframe_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::gig_session::GigSession;

/// Column list shared across queries.
const COLUMNS: &str = "id, session_id, venue_name, start_time, expected_end, status, created_at";

/// Provides check-in session persistence.
pub struct GigSessionRepo;

impl GigSessionRepo {
    /// Insert a new session in the `active` state, returning the row.
    ///
    /// A duplicate `session_id` violates `uq_gig_sessions_session_id`
    /// and surfaces as a conflict to the caller.
    pub async fn create(
        pool: &PgPool,
        session_id: &str,
        venue_name: &str,
        start_time: Timestamp,
        expected_end: Timestamp,
    ) -> Result<GigSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO gig_sessions (session_id, venue_name, start_time, expected_end) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GigSession>(&query)
            .bind(session_id)
            .bind(venue_name)
            .bind(start_time)
            .bind(expected_end)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its client-generated id.
    pub async fn find_by_session_id(
        pool: &PgPool,
        session_id: &str,
    ) -> Result<Option<GigSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gig_sessions WHERE session_id = $1");
        sqlx::query_as::<_, GigSession>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a client-asserted status. Returns the updated row if the
    /// session exists.
    ///
    /// No prior-state guard: the client owns the timer, and the stored
    /// row is an audit mirror of what the client asserted last.
    pub async fn update_status(
        pool: &PgPool,
        session_id: &str,
        status: &str,
    ) -> Result<Option<GigSession>, sqlx::Error> {
        let query = format!(
            "UPDATE gig_sessions SET status = $1 WHERE session_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GigSession>(&query)
            .bind(status)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }
}
