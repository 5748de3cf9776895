//! Incident report entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `incident_reports` table. Immutable and anonymous.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub id: DbId,
    pub venue_id: DbId,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub severity: String,
    pub description: String,
    pub date_of_incident: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for filing an incident. The venue id comes from the URL path;
/// `date_of_incident` arrives as text and is parsed by the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncident {
    #[serde(rename = "type")]
    pub incident_type: String,
    pub severity: String,
    pub description: String,
    pub date_of_incident: String,
}
