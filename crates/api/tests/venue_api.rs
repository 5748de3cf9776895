//! HTTP-level integration tests for the venue directory.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use herframe_db::models::venue::CreateVenue;
use herframe_db::repositories::VenueRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn venue(name: &str, city: &str, category: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        address: "1 Example St".to_string(),
        city: city.to_string(),
        category: Some(category.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: listing orders by rating volume, most-rated first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_orders_by_rating_volume(pool: PgPool) {
    let quiet = VenueRepo::create(&pool, &venue("Quiet Gallery", "Portland", "gallery"))
        .await
        .unwrap();
    let busy = VenueRepo::create(&pool, &venue("Busy Gallery", "Portland", "gallery"))
        .await
        .unwrap();

    let app = build_test_app(pool);

    // Two ratings for the busy venue, none for the quiet one.
    for _ in 0..2 {
        let response = post_json(
            app.clone(),
            &format!("/api/v1/venues/{}/ratings", busy.id),
            json!({ "safety": 5, "fairPay": 5, "respect": 5 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/venues").await;
    assert_eq!(response.status(), StatusCode::OK);

    let venues = body_json(response).await["data"].clone();
    let items = venues.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"].as_i64(), Some(busy.id));
    assert_eq!(items[1]["id"].as_i64(), Some(quiet.id));
}

// ---------------------------------------------------------------------------
// Test: city filter is a case-insensitive substring match
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn city_filter_matches_substring_case_insensitively(pool: PgPool) {
    VenueRepo::create(&pool, &venue("Prism Gallery", "Portland", "gallery"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &venue("The Loft Gallery", "New York", "gallery"))
        .await
        .unwrap();

    let app = build_test_app(pool);

    let response = get(app, "/api/v1/venues?city=port").await;
    assert_eq!(response.status(), StatusCode::OK);

    let venues = body_json(response).await["data"].clone();
    let items = venues.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Prism Gallery");
    assert_eq!(items[0]["city"], "Portland");
}

// ---------------------------------------------------------------------------
// Test: q searches name and city text
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn text_search_covers_name_and_city(pool: PgPool) {
    VenueRepo::create(&pool, &venue("Clay & Fire Studio", "Austin", "pottery_studio"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &venue("Kiln & Thread", "Nashville", "pottery_studio"))
        .await
        .unwrap();

    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/venues?q=clay").await;
    let venues = body_json(response).await["data"].clone();
    let items = venues.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Clay & Fire Studio");

    // City words are searchable too.
    let response = get(app, "/api/v1/venues?q=nashville").await;
    let venues = body_json(response).await["data"].clone();
    let items = venues.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Kiln & Thread");
}

// ---------------------------------------------------------------------------
// Test: get returns the full record, 404 when absent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_venue_returns_record_or_404(pool: PgPool) {
    let created = VenueRepo::create(&pool, &venue("Sunset Sculpture Garden", "Los Angeles", "outdoor"))
        .await
        .unwrap();

    let app = build_test_app(pool);

    let response = get(app.clone(), &format!("/api/v1/venues/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await["data"].clone();
    assert_eq!(fetched["name"], "Sunset Sculpture Garden");
    assert_eq!(fetched["category"], "outdoor");
    assert_eq!(fetched["avgSafety"], 0.0);
    assert_eq!(fetched["totalRatings"], 0);

    let response = get(app, "/api/v1/venues/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
