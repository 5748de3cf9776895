//! Route definitions for opportunity listings.
//!
//! Mounted at `/opportunities` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::opportunities;
use crate::state::AppState;

/// Opportunity routes.
///
/// ```text
/// GET    /                  -> list_opportunities
/// POST   /                  -> submit_opportunity
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(opportunities::submit_opportunity).get(opportunities::list_opportunities),
    )
}
