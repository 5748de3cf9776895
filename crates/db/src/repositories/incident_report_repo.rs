//! Repository for the `incident_reports` table and the venue incident
//! counter.

use herframe_core::search::VENUE_CHILD_LIST_LIMIT;
use herframe_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::incident_report::{CreateIncident, IncidentReport};

/// Column list shared across queries.
const COLUMNS: &str =
    "id, venue_id, incident_type, severity, description, date_of_incident, created_at";

/// Provides incident submission and retrieval.
pub struct IncidentReportRepo;

impl IncidentReportRepo {
    /// Insert an incident and bump the venue's incident total, in one
    /// transaction.
    ///
    /// The counter is an atomic delta (`total_incidents + 1`), not a
    /// recompute, so concurrent submissions cannot undercount. Severity
    /// does not weight the counter.
    pub async fn create_with_count(
        pool: &PgPool,
        venue_id: DbId,
        input: &CreateIncident,
        date_of_incident: Timestamp,
    ) -> Result<IncidentReport, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO incident_reports \
                (venue_id, incident_type, severity, description, date_of_incident) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let incident = sqlx::query_as::<_, IncidentReport>(&insert)
            .bind(venue_id)
            .bind(&input.incident_type)
            .bind(&input.severity)
            .bind(&input.description)
            .bind(date_of_incident)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE venues \
             SET total_incidents = total_incidents + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(incident)
    }

    /// List the most recent incidents for a venue, newest first.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<IncidentReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incident_reports \
             WHERE venue_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, IncidentReport>(&query)
            .bind(venue_id)
            .bind(VENUE_CHILD_LIST_LIMIT)
            .fetch_all(pool)
            .await
    }
}
