//! Route definitions for artist stories.
//!
//! Mounted at `/stories` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::stories;
use crate::state::AppState;

/// Story routes.
///
/// ```text
/// GET    /                  -> list_stories
/// POST   /                  -> submit_story
/// POST   /{id}/upvote       -> upvote_story
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(stories::submit_story).get(stories::list_stories))
        .route("/{id}/upvote", post(stories::upvote_story))
}
