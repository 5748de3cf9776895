//! Handlers for venue rating submission and retrieval.
//!
//! Submitting a rating persists the rating row and recomputes the
//! venue's aggregate fields from the full rating set in one
//! transaction. The response carries only the created rating; callers
//! re-fetch the venue to see updated aggregates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use herframe_core::error::CoreError;
use herframe_core::rating;
use herframe_core::types::DbId;
use herframe_db::models::venue_rating::CreateRating;
use herframe_db::repositories::{VenueRatingRepo, VenueRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /venues/{id}/ratings
// ---------------------------------------------------------------------------

/// Submit a rating for a venue.
///
/// Validation runs before any write: out-of-range scores leave the
/// venue's aggregates untouched.
pub async fn submit_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRating>,
) -> AppResult<impl IntoResponse> {
    rating::validate_score("safety", input.safety)?;
    rating::validate_score("fairPay", input.fair_pay)?;
    rating::validate_score("respect", input.respect)?;
    if let Some(ref comment) = input.comment {
        rating::validate_comment(comment)?;
    }

    VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Venue",
            id: id.to_string(),
        })?;

    let created = VenueRatingRepo::create_with_aggregates(&state.pool, id, &input).await?;

    tracing::info!(
        venue_id = id,
        rating_id = created.id,
        safety = created.safety,
        fair_pay = created.fair_pay,
        respect = created.respect,
        "Venue rating submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /venues/{id}/ratings
// ---------------------------------------------------------------------------

/// List the most recent ratings for a venue, newest first.
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ratings = VenueRatingRepo::list_for_venue(&state.pool, id).await?;

    Ok(Json(DataResponse { data: ratings }))
}
