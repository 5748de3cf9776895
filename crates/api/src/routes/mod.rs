pub mod checkin;
pub mod health;
pub mod opportunities;
pub mod stories;
pub mod tips;
pub mod venues;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                        list (?q=&city=)
/// /venues/{id}                   get
/// /venues/{id}/ratings           list, submit
/// /venues/{id}/incidents         list, submit
///
/// /checkin                       start session
/// /checkin/{sessionId}           get, record transition (PATCH)
///
/// /tips                          list (?category=), submit
/// /tips/{id}/upvote              upvote (POST)
/// /stories                       list (?category=), submit
/// /stories/{id}/upvote           upvote (POST)
/// /opportunities                 list (?medium=&q=), submit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Venue directory plus venue-scoped ratings and incidents.
        .nest("/venues", venues::router())
        // Safety check-in sessions.
        .nest("/checkin", checkin::router())
        // Community advice feed.
        .nest("/tips", tips::router())
        // Artist story feed.
        .nest("/stories", stories::router())
        // Opportunity listings.
        .nest("/opportunities", opportunities::router())
}
