//! Handlers for the venue directory.
//!
//! Venues are created at seed time; the public surface is read-only.
//! Aggregate fields on the returned records are maintained by the rating
//! and incident submission paths.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use herframe_core::error::CoreError;
use herframe_core::search::VENUE_LIST_LIMIT;
use herframe_core::types::DbId;
use herframe_db::models::venue::VenueListParams;
use herframe_db::repositories::VenueRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /venues
// ---------------------------------------------------------------------------

/// List venues, most-rated first, with optional `q` (name/city text
/// search) and `city` (substring) filters.
pub async fn list_venues(
    State(state): State<AppState>,
    Query(params): Query<VenueListParams>,
) -> AppResult<impl IntoResponse> {
    let venues = VenueRepo::list_filtered(
        &state.pool,
        params.q.as_deref(),
        params.city.as_deref(),
        VENUE_LIST_LIMIT,
    )
    .await?;

    Ok(Json(DataResponse { data: venues }))
}

// ---------------------------------------------------------------------------
// GET /venues/{id}
// ---------------------------------------------------------------------------

/// Get a single venue, including its aggregate fields.
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Venue",
            id: id.to_string(),
        })?;

    Ok(Json(DataResponse { data: venue }))
}
