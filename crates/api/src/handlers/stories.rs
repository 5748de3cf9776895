//! Handlers for artist stories.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use herframe_core::error::CoreError;
use herframe_core::search::{clamp_limit, FEED_LIST_LIMIT};
use herframe_core::story;
use herframe_core::types::DbId;
use herframe_db::models::art_story::{CreateStory, StoryListParams};
use herframe_db::repositories::ArtStoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /stories
// ---------------------------------------------------------------------------

/// List stories, newest first. `category=all` (or none) means no filter.
pub async fn list_stories(
    State(state): State<AppState>,
    Query(params): Query<StoryListParams>,
) -> AppResult<impl IntoResponse> {
    let category = params.category.as_deref().filter(|c| *c != "all");
    let limit = clamp_limit(params.limit, FEED_LIST_LIMIT, FEED_LIST_LIMIT);

    let stories = ArtStoryRepo::list_filtered(&state.pool, category, limit).await?;

    Ok(Json(DataResponse { data: stories }))
}

// ---------------------------------------------------------------------------
// POST /stories
// ---------------------------------------------------------------------------

/// Submit a new story.
pub async fn submit_story(
    State(state): State<AppState>,
    Json(input): Json<CreateStory>,
) -> AppResult<impl IntoResponse> {
    story::validate_title(&input.title)?;
    story::validate_body(&input.body)?;
    if let Some(ref category) = input.category {
        story::validate_category(category)?;
    }

    let created = ArtStoryRepo::create(&state.pool, &input).await?;

    tracing::info!(story_id = created.id, category = %created.category, "Story submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// POST /stories/{id}/upvote
// ---------------------------------------------------------------------------

/// Upvote a story. The increment is atomic.
pub async fn upvote_story(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let story = ArtStoryRepo::upvote(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ArtStory",
            id: id.to_string(),
        })?;

    Ok(Json(DataResponse { data: story }))
}
