//! Filename generation for event records.

use crate::error::{StoreError, StoreResult};

/// Extension of event record files.
pub const EVENT_FILE_EXTENSION: &str = "json";

/// Convert an event name to the slug used in its filename.
///
/// Every character outside `[a-z0-9]` (after lowercasing) becomes a `-`.
/// Runs of dashes are kept as-is so the mapping stays one char to one char.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Filename for an event: `<id>-<slug(name)>.json`
pub fn event_filename(id: &str, name: &str) -> String {
    format!("{}-{}.{}", id, slugify(name), EVENT_FILE_EXTENSION)
}

/// Check that an id can safely prefix a filename inside the store directory.
pub fn validate_id(id: &str) -> StoreResult<()> {
    if id.is_empty() {
        return Err(StoreError::InvalidEvent("id must not be empty".into()));
    }

    if id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidEvent(format!(
            "id '{}' is not usable as a filename",
            id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Spring Cup"), "spring-cup");
        assert_eq!(slugify("LHN 25 - Round 3"), "lhn-25---round-3");
        assert_eq!(slugify("Meeting: Q4!"), "meeting--q4-");
        assert_eq!(slugify("ÉTÉ"), "-t-");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        assert_eq!(slugify("Grand Prix 2024"), slugify("Grand Prix 2024"));
    }

    #[test]
    fn test_event_filename() {
        assert_eq!(event_filename("e1", "Spring Cup"), "e1-spring-cup.json");
        assert_eq!(event_filename("42", ""), "42-.json");
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("e1").is_ok());
        assert!(validate_id("1704067200000-3").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("..").is_err());
        assert!(validate_id("a/b").is_err());
        assert!(validate_id("a\\b").is_err());
    }
}
