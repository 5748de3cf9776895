//! Route definitions for community tips.
//!
//! Mounted at `/tips` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::tips;
use crate::state::AppState;

/// Tip routes.
///
/// ```text
/// GET    /                  -> list_tips
/// POST   /                  -> submit_tip
/// POST   /{id}/upvote       -> upvote_tip
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tips::submit_tip).get(tips::list_tips))
        .route("/{id}/upvote", post(tips::upvote_tip))
}
