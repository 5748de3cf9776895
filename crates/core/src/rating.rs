//! Venue rating constants, validation, and aggregate arithmetic.
//!
//! Ratings score a venue on three dimensions (safety, fair pay, respect),
//! each an integer 1-5. The venue's stored averages are always the full
//! recomputed mean over every rating, rounded to one decimal place.

use crate::error::CoreError;

/// Lowest allowed score on any dimension.
pub const MIN_SCORE: i16 = 1;
/// Highest allowed score on any dimension.
pub const MAX_SCORE: i16 = 5;

/// Maximum length for the optional free-text comment (characters).
pub const MAX_COMMENT_LENGTH: usize = 500;

/// Validate a single rating dimension score.
///
/// `dimension` names the field in the error message (`safety`, `fairPay`,
/// `respect`).
pub fn validate_score(dimension: &str, value: i16) -> Result<(), CoreError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{dimension} must be an integer between {MIN_SCORE} and {MAX_SCORE} (got {value})"
        )))
    }
}

/// Validate the optional comment length.
pub fn validate_comment(comment: &str) -> Result<(), CoreError> {
    if comment.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Round an average to one decimal place for storage on the venue.
///
/// Matches the stored precision of the aggregate fields: a mean of
/// 4.666... is stored as 4.7.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
