//! Handlers for community tips.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use herframe_core::error::CoreError;
use herframe_core::search::{clamp_limit, TIP_LIST_LIMIT};
use herframe_core::tip;
use herframe_core::types::DbId;
use herframe_db::models::tip::{CreateTip, TipListParams};
use herframe_db::repositories::TipRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /tips
// ---------------------------------------------------------------------------

/// List tips, newest first. `category=all` (or none) means no filter.
pub async fn list_tips(
    State(state): State<AppState>,
    Query(params): Query<TipListParams>,
) -> AppResult<impl IntoResponse> {
    let category = params.category.as_deref().filter(|c| *c != "all");
    let limit = clamp_limit(params.limit, TIP_LIST_LIMIT, TIP_LIST_LIMIT);

    let tips = TipRepo::list_filtered(&state.pool, category, limit).await?;

    Ok(Json(DataResponse { data: tips }))
}

// ---------------------------------------------------------------------------
// POST /tips
// ---------------------------------------------------------------------------

/// Submit a new tip.
pub async fn submit_tip(
    State(state): State<AppState>,
    Json(input): Json<CreateTip>,
) -> AppResult<impl IntoResponse> {
    tip::validate_body(&input.body)?;
    if let Some(ref category) = input.category {
        tip::validate_category(category)?;
    }

    let created = TipRepo::create(&state.pool, &input).await?;

    tracing::info!(tip_id = created.id, category = %created.category, "Tip submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// POST /tips/{id}/upvote
// ---------------------------------------------------------------------------

/// Upvote a tip. The increment is atomic.
pub async fn upvote_tip(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tip = TipRepo::upvote(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Tip",
            id: id.to_string(),
        })?;

    Ok(Json(DataResponse { data: tip }))
}
