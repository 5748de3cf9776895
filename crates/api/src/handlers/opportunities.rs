//! Handlers for opportunity listings.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use herframe_core::opportunity;
use herframe_core::search::{clamp_limit, FEED_LIST_LIMIT};
use herframe_db::models::opportunity::{CreateOpportunity, OpportunityListParams};
use herframe_db::repositories::OpportunityRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /opportunities
// ---------------------------------------------------------------------------

/// List opportunities, newest first, with optional medium and substring
/// search filters. `medium=all` (or none) means no filter.
pub async fn list_opportunities(
    State(state): State<AppState>,
    Query(params): Query<OpportunityListParams>,
) -> AppResult<impl IntoResponse> {
    let medium = params.medium.as_deref().filter(|m| *m != "all");
    let limit = clamp_limit(params.limit, FEED_LIST_LIMIT, FEED_LIST_LIMIT);

    let opportunities =
        OpportunityRepo::list_filtered(&state.pool, medium, params.q.as_deref(), limit).await?;

    Ok(Json(DataResponse { data: opportunities }))
}

// ---------------------------------------------------------------------------
// POST /opportunities
// ---------------------------------------------------------------------------

/// Post a new opportunity listing.
pub async fn submit_opportunity(
    State(state): State<AppState>,
    Json(input): Json<CreateOpportunity>,
) -> AppResult<impl IntoResponse> {
    opportunity::validate_title(&input.title)?;
    opportunity::validate_artist_name(&input.artist_name)?;
    opportunity::validate_description(&input.description)?;
    if let Some(ref story) = input.story {
        opportunity::validate_story(story)?;
    }
    if let Some(ref medium) = input.medium {
        opportunity::validate_medium(medium)?;
    }

    let created = OpportunityRepo::create(&state.pool, &input).await?;

    tracing::info!(
        opportunity_id = created.id,
        medium = %created.medium,
        "Opportunity posted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
