//! HTTP-level integration tests for safety check-in sessions.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, patch_empty, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn start_body(session_id: &str, duration_minutes: i64) -> serde_json::Value {
    json!({
        "sessionId": session_id,
        "venueName": "Prism Gallery",
        "durationMinutes": duration_minutes,
    })
}

fn parse_ts(value: &serde_json::Value) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&chrono::Utc)
}

// ---------------------------------------------------------------------------
// Test: starting a session fixes expected_end at start + duration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn start_session_sets_expected_end_exactly(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/checkin", start_body("chk-1", 120)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let session = body_json(response).await["data"].clone();
    assert_eq!(session["sessionId"], "chk-1");
    assert_eq!(session["status"], "active");

    let start = parse_ts(&session["startTime"]);
    let end = parse_ts(&session["expectedEnd"]);
    assert_eq!((end - start).num_milliseconds(), 7_200_000);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn thirty_minute_session_expected_end(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/checkin", start_body("chk-30", 30)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let session = body_json(response).await["data"].clone();
    let start = parse_ts(&session["startTime"]);
    let end = parse_ts(&session["expectedEnd"]);
    assert_eq!((end - start).num_milliseconds(), 1_800_000);
}

// ---------------------------------------------------------------------------
// Test: duration bounds are enforced
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_duration_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    for bad in [14, 721, 0] {
        let response = post_json(app.clone(), "/api/v1/checkin", start_body("chk-bad", bad)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Test: bare PATCH checks out, and the state sticks on re-read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn checkout_transitions_and_is_stable_on_reread(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/checkin", start_body("chk-abc", 30)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = patch_empty(app.clone(), "/api/v1/checkin/chk-abc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let session = body_json(response).await["data"].clone();
    assert_eq!(session["status"], "checked_out");

    let response = get(app, "/api/v1/checkin/chk-abc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let session = body_json(response).await["data"].clone();
    assert_eq!(session["status"], "checked_out");
}

// ---------------------------------------------------------------------------
// Test: the client-detected expiry path records overdue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn overdue_mirror_write_is_recorded(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/checkin", start_body("chk-late", 15)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = patch_json(
        app.clone(),
        "/api/v1/checkin/chk-late",
        json!({ "status": "overdue" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let session = body_json(response).await["data"].clone();
    assert_eq!(session["status"], "overdue");

    let response = get(app, "/api/v1/checkin/chk-late").await;
    let session = body_json(response).await["data"].clone();
    assert_eq!(session["status"], "overdue");
}

// ---------------------------------------------------------------------------
// Test: clients may not assert reserved or unknown statuses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn reserved_and_unknown_statuses_are_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/checkin", start_body("chk-res", 60)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    for bad in ["alert_sent", "active", "done"] {
        let response = patch_json(
            app.clone(),
            "/api/v1/checkin/chk-res",
            json!({ "status": bad }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Session is untouched.
    let response = get(app, "/api/v1/checkin/chk-res").await;
    let session = body_json(response).await["data"].clone();
    assert_eq!(session["status"], "active");
}

// ---------------------------------------------------------------------------
// Test: unknown session ids return 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_session_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = patch_empty(app.clone(), "/api/v1/checkin/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/checkin/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: duplicate session ids are rejected with 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_session_id_returns_409(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/checkin", start_body("chk-dup", 60)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/api/v1/checkin", start_body("chk-dup", 90)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}
