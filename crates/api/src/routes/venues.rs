//! Route definitions for the venue directory and its child resources.
//!
//! Mounted at `/venues` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{incidents, ratings, venues};
use crate::state::AppState;

/// Venue routes.
///
/// ```text
/// GET    /                  -> list_venues
/// GET    /{id}              -> get_venue
/// POST   /{id}/ratings      -> submit_rating
/// GET    /{id}/ratings      -> list_ratings
/// POST   /{id}/incidents    -> submit_incident
/// GET    /{id}/incidents    -> list_incidents
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venues::list_venues))
        .route("/{id}", get(venues::get_venue))
        .route(
            "/{id}/ratings",
            post(ratings::submit_rating).get(ratings::list_ratings),
        )
        .route(
            "/{id}/incidents",
            post(incidents::submit_incident).get(incidents::list_incidents),
        )
}
