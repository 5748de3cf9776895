//! Incident report value tables and validation.
//!
//! Incidents are anonymous: no submitter identity is recorded. Severity is
//! informational only -- every incident counts equally toward the venue's
//! incident total.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Valid incident types.
pub const VALID_TYPES: &[&str] = &[
    "harassment",
    "unsafe_conditions",
    "nonpayment",
    "discrimination",
    "other",
];

/// Valid severity levels, lowest to highest.
pub const VALID_SEVERITIES: &[&str] = &["low", "medium", "high", "critical"];

/// Minimum length for the incident description (characters).
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
/// Maximum length for the incident description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Validate that an incident type is one of the known values.
pub fn validate_type(incident_type: &str) -> Result<(), CoreError> {
    if VALID_TYPES.contains(&incident_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid incident type '{incident_type}'. Must be one of: {VALID_TYPES:?}"
        )))
    }
}

/// Validate that a severity is one of the known values.
pub fn validate_severity(severity: &str) -> Result<(), CoreError> {
    if VALID_SEVERITIES.contains(&severity) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid severity '{severity}'. Must be one of: {VALID_SEVERITIES:?}"
        )))
    }
}

/// Validate the description length bounds.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len < MIN_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "description must be at least {MIN_DESCRIPTION_LENGTH} characters (got {len})"
        )));
    }
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Parse the user-supplied date of incident.
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (interpreted
/// as midnight UTC, the granularity a date picker submits).
pub fn parse_date_of_incident(raw: &str) -> Result<Timestamp, CoreError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        let midnight = date.and_time(NaiveTime::MIN);
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(CoreError::Validation(format!(
        "dateOfIncident '{raw}' is not a valid date"
    )))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
