//! Artist story value table and validation.

use crate::error::CoreError;

/// Valid story categories.
pub const VALID_CATEGORIES: &[&str] = &["journey", "inspiration", "challenge", "advice", "general"];

/// Category applied when none is given.
pub const DEFAULT_CATEGORY: &str = "general";

/// Maximum length of a story title.
pub const MAX_TITLE_LENGTH: usize = 200;
/// Minimum length of a story body.
pub const MIN_BODY_LENGTH: usize = 10;
/// Maximum length of a story body.
pub const MAX_BODY_LENGTH: usize = 3_000;

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid story category '{category}'. Must be one of: {VALID_CATEGORIES:?}"
        )))
    }
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_body(body: &str) -> Result<(), CoreError> {
    let len = body.chars().count();
    if len < MIN_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "body must be at least {MIN_BODY_LENGTH} characters (got {len})"
        )));
    }
    if len > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "body exceeds maximum length of {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("How I found my first gallery").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn body_bounds() {
        assert!(validate_body("short").is_err());
        assert!(validate_body("long enough to count as a story body").is_ok());
        assert!(validate_body(&"a".repeat(MAX_BODY_LENGTH + 1)).is_err());
    }

    #[test]
    fn category_table() {
        for c in VALID_CATEGORIES {
            assert!(validate_category(c).is_ok());
        }
        assert!(validate_category("rant").is_err());
    }
}
