//! Check-in session status constants, transition rules, and validation.
//!
//! A check-in session is a self-timed safety window for visiting a venue.
//! The client owns the authoritative timer; the server only records
//! client-asserted transitions and never expires a session on its own.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly started session.
pub const STATUS_ACTIVE: &str = "active";
/// User checked out before (or after) the expected end. Terminal.
pub const STATUS_CHECKED_OUT: &str = "checked_out";
/// Client-detected expiry: wall clock passed expected_end while still
/// active. Terminal from the server's perspective.
pub const STATUS_OVERDUE: &str = "overdue";
/// Reserved. No operation transitions into this status.
pub const STATUS_ALERT_SENT: &str = "alert_sent";

/// All statuses a session row may hold.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_CHECKED_OUT,
    STATUS_OVERDUE,
    STATUS_ALERT_SENT,
];

/// Statuses a client may assert via the transition endpoint.
pub const CLIENT_ASSERTABLE_STATUSES: &[&str] = &[STATUS_CHECKED_OUT, STATUS_OVERDUE];

// ---------------------------------------------------------------------------
// Duration bounds
// ---------------------------------------------------------------------------

/// Shortest allowed session (minutes).
pub const MIN_DURATION_MINUTES: i32 = 15;
/// Longest allowed session (minutes) -- twelve hours.
pub const MAX_DURATION_MINUTES: i32 = 720;

/// Validate the requested session duration.
pub fn validate_duration(minutes: i32) -> Result<(), CoreError> {
    if (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "durationMinutes must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} \
             (got {minutes})"
        )))
    }
}

/// Validate the client-generated session id.
pub fn validate_session_id(session_id: &str) -> Result<(), CoreError> {
    if session_id.trim().is_empty() {
        Err(CoreError::Validation("sessionId must not be empty".into()))
    } else {
        Ok(())
    }
}

/// Validate the free-text venue name (not a venue reference).
pub fn validate_venue_name(venue_name: &str) -> Result<(), CoreError> {
    if venue_name.trim().is_empty() {
        Err(CoreError::Validation("venueName must not be empty".into()))
    } else {
        Ok(())
    }
}

/// Validate a client-asserted target status for the transition endpoint.
///
/// Only `checked_out` and `overdue` may be written by a client; `active`
/// is set at creation and `alert_sent` is reserved.
pub fn validate_asserted_status(status: &str) -> Result<(), CoreError> {
    if CLIENT_ASSERTABLE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid session status '{status}'. Must be one of: {CLIENT_ASSERTABLE_STATUSES:?}"
        )))
    }
}

/// Compute the expected end of a session started at `start`.
pub fn expected_end(start: Timestamp, duration_minutes: i32) -> Timestamp {
    start + Duration::minutes(i64::from(duration_minutes))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
