//! Opportunity listing value table and validation.

use crate::error::CoreError;

/// Valid artistic mediums.
pub const VALID_MEDIUMS: &[&str] = &[
    "digital",
    "painting",
    "pottery",
    "sculpture",
    "graffiti",
    "photography",
    "textile",
    "mixed_media",
    "other",
];

/// Medium applied when none is given.
pub const DEFAULT_MEDIUM: &str = "other";

/// Price text applied when none is given.
pub const DEFAULT_PRICE: &str = "Not for sale";

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_ARTIST_NAME_LENGTH: usize = 100;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;
pub const MAX_STORY_LENGTH: usize = 3_000;

pub fn validate_medium(medium: &str) -> Result<(), CoreError> {
    if VALID_MEDIUMS.contains(&medium) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid medium '{medium}'. Must be one of: {VALID_MEDIUMS:?}"
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

pub fn validate_artist_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(CoreError::Validation("artistName must not be empty".into()));
    }
    if len > MAX_ARTIST_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "artistName exceeds maximum length of {MAX_ARTIST_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

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

pub fn validate_story(story: &str) -> Result<(), CoreError> {
    if story.chars().count() > MAX_STORY_LENGTH {
        return Err(CoreError::Validation(format!(
            "story exceeds maximum length of {MAX_STORY_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_table() {
        for m in VALID_MEDIUMS {
            assert!(validate_medium(m).is_ok());
        }
        assert!(validate_medium("performance").is_err());
    }

    #[test]
    fn title_and_artist_bounds() {
        assert!(validate_title("Fractured Light").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_artist_name("Maya Chen").is_ok());
        assert!(validate_artist_name(&"a".repeat(MAX_ARTIST_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn description_and_story_bounds() {
        assert!(validate_description("too short").is_err());
        assert!(validate_description("a digital exploration of light").is_ok());
        assert!(validate_story("").is_ok());
        assert!(validate_story(&"a".repeat(MAX_STORY_LENGTH + 1)).is_err());
    }
}
