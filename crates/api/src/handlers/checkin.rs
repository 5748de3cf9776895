//! Handlers for safety check-in sessions.
//!
//! The client owns the authoritative timer: it polls its own clock and
//! pushes transitions here for durable logging. The server never expires
//! a session on its own -- a session whose client disappears before its
//! expected end stays `active` in storage.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use herframe_core::checkin;
use herframe_core::error::CoreError;
use herframe_db::models::gig_session::{CreateSession, UpdateSessionStatus};
use herframe_db::repositories::GigSessionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /checkin
// ---------------------------------------------------------------------------

/// Start a check-in session.
///
/// `expected_end` is fixed at creation as start + requested duration.
/// The session id is client-generated; a collision violates the unique
/// constraint and surfaces as 409.
pub async fn start_session(
    State(state): State<AppState>,
    Json(input): Json<CreateSession>,
) -> AppResult<impl IntoResponse> {
    checkin::validate_session_id(&input.session_id)?;
    checkin::validate_venue_name(&input.venue_name)?;
    checkin::validate_duration(input.duration_minutes)?;

    let start_time = Utc::now();
    let expected_end = checkin::expected_end(start_time, input.duration_minutes);

    let session = GigSessionRepo::create(
        &state.pool,
        &input.session_id,
        &input.venue_name,
        start_time,
        expected_end,
    )
    .await?;

    tracing::info!(
        session_id = %session.session_id,
        venue_name = %session.venue_name,
        duration_minutes = input.duration_minutes,
        "Check-in session started",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

// ---------------------------------------------------------------------------
// PATCH /checkin/{sessionId}
// ---------------------------------------------------------------------------

/// Record a client-asserted transition.
///
/// A bare PATCH is a check-out; the client-detected expiry path sends
/// `{"status": "overdue"}` through the same endpoint. The transition is
/// applied regardless of prior state: the stored row mirrors whatever
/// the client asserted last.
pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Option<Json<UpdateSessionStatus>>,
) -> AppResult<impl IntoResponse> {
    let target = body
        .and_then(|Json(input)| input.status)
        .unwrap_or_else(|| checkin::STATUS_CHECKED_OUT.to_string());

    checkin::validate_asserted_status(&target)?;

    let session = GigSessionRepo::update_status(&state.pool, &session_id, &target)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "GigSession",
            id: session_id.clone(),
        })?;

    tracing::info!(
        session_id = %session.session_id,
        status = %session.status,
        "Check-in session transition recorded",
    );

    Ok(Json(DataResponse { data: session }))
}

// ---------------------------------------------------------------------------
// GET /checkin/{sessionId}
// ---------------------------------------------------------------------------

/// Get the stored state of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let session = GigSessionRepo::find_by_session_id(&state.pool, &session_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "GigSession",
            id: session_id.clone(),
        })?;

    Ok(Json(DataResponse { data: session }))
}
