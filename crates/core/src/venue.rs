//! Venue category table and field validation.

use crate::error::CoreError;

/// Valid venue categories.
pub const VALID_CATEGORIES: &[&str] = &[
    "gallery",
    "studio",
    "pottery_studio",
    "graffiti_spot",
    "makerspace",
    "outdoor",
    "other",
];

/// Category applied when none is given.
pub const DEFAULT_CATEGORY: &str = "other";

/// Validate that a category is one of the known values.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid venue category '{category}'. Must be one of: {VALID_CATEGORIES:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_are_valid() {
        for c in VALID_CATEGORIES {
            assert!(validate_category(c).is_ok(), "category '{c}' should be valid");
        }
    }

    #[test]
    fn unknown_category_is_invalid() {
        assert!(validate_category("warehouse").is_err());
        assert!(validate_category("").is_err());
    }
}
