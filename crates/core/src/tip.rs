//! Community tip value table and validation.

use crate::error::CoreError;

/// Valid tip categories.
pub const VALID_CATEGORIES: &[&str] = &["safety", "pricing", "technique", "supplies", "general"];

/// Category applied when none is given.
pub const DEFAULT_CATEGORY: &str = "general";

/// Maximum length of a tip body (tweet-length).
pub const MAX_BODY_LENGTH: usize = 280;

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid tip category '{category}'. Must be one of: {VALID_CATEGORIES:?}"
        )))
    }
}

pub fn validate_body(body: &str) -> Result<(), CoreError> {
    let len = body.chars().count();
    if len == 0 {
        return Err(CoreError::Validation("body must not be empty".into()));
    }
    if len > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "body exceeds maximum length of {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}
