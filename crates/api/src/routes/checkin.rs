//! Route definitions for safety check-in sessions.
//!
//! Mounted at `/checkin` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::checkin;
use crate::state::AppState;

/// Check-in routes.
///
/// ```text
/// POST   /                  -> start_session
/// GET    /{sessionId}       -> get_session
/// PATCH  /{sessionId}       -> update_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(checkin::start_session))
        .route(
            "/{session_id}",
            get(checkin::get_session).patch(checkin::update_session),
        )
}
