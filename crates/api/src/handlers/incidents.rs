//! Handlers for anonymous incident reporting.
//!
//! Filing an incident persists the report and bumps the venue's
//! monotonic incident counter in one transaction. No submitter identity
//! is recorded.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use herframe_core::error::CoreError;
use herframe_core::incident;
use herframe_core::types::DbId;
use herframe_db::models::incident_report::CreateIncident;
use herframe_db::repositories::{IncidentReportRepo, VenueRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /venues/{id}/incidents
// ---------------------------------------------------------------------------

/// File an incident report against a venue.
pub async fn submit_incident(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateIncident>,
) -> AppResult<impl IntoResponse> {
    incident::validate_type(&input.incident_type)?;
    incident::validate_severity(&input.severity)?;
    incident::validate_description(&input.description)?;
    let date_of_incident = incident::parse_date_of_incident(&input.date_of_incident)?;

    VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Venue",
            id: id.to_string(),
        })?;

    let created =
        IncidentReportRepo::create_with_count(&state.pool, id, &input, date_of_incident).await?;

    tracing::info!(
        venue_id = id,
        incident_id = created.id,
        incident_type = %created.incident_type,
        severity = %created.severity,
        "Incident report filed",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /venues/{id}/incidents
// ---------------------------------------------------------------------------

/// List the most recent incidents for a venue, newest first.
pub async fn list_incidents(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let incidents = IncidentReportRepo::list_for_venue(&state.pool, id).await?;

    Ok(Json(DataResponse { data: incidents }))
}
