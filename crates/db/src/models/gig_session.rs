//! Check-in session entity model and DTOs.

use herframe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `gig_sessions` table.
///
/// `session_id` is the client-generated identity; the BIGSERIAL `id` is
/// internal. The server records client-asserted status transitions and
/// never expires a session itself.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GigSession {
    pub id: DbId,
    pub session_id: String,
    pub venue_name: String,
    pub start_time: Timestamp,
    pub expected_end: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for starting a check-in session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSession {
    pub session_id: String,
    pub venue_name: String,
    pub duration_minutes: i32,
}

/// DTO for the transition endpoint. An absent body (or absent field)
/// means a plain check-out.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionStatus {
    pub status: Option<String>,
}
