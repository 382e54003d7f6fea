//! List events from the store directory.

use super::scan;
use crate::error::StoreResult;
use crate::event::Event;
use std::path::Path;

/// List all events in the store directory, creating it if missing.
///
/// Order follows directory enumeration and is not guaranteed to be stable.
pub async fn list(dir: &Path) -> StoreResult<Vec<Event>> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(scan(dir).await?.into_events())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data").join("events");

        let events = list(&dir).await.unwrap();

        assert!(events.is_empty());
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_list_is_idempotent_on_existing_directory() {
        let tmp = TempDir::new().unwrap();

        assert!(list(tmp.path()).await.unwrap().is_empty());
        assert!(list(tmp.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_record() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("e1-cup.json"),
            r#"{"id":"e1","name":"Cup","format":"Slalom","date":"2024-01-01","participants":[]}"#,
        )
        .unwrap();
        std::fs::write(tmp.path().join("e2-cup.json"), "{\"id\":").unwrap();

        let events = list(tmp.path()).await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "e1");
    }

    #[tokio::test]
    async fn test_list_fails_when_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("events");
        std::fs::write(&file, "").unwrap();

        assert!(list(&file).await.is_err());
    }
}
