//! Delete event files from the store directory.

use super::{StoredEvent, scan};
use crate::error::{StoreError, StoreResult};
use crate::slug::validate_id;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Delete the event whose stored id is exactly `id`.
///
/// Falls back to an unparsable `<id>-*.json` file when no readable event has
/// that id. Returns the path of the removed file, or `NotFound`.
pub async fn delete(dir: &Path, id: &str) -> StoreResult<PathBuf> {
    validate_id(id)?;

    tokio::fs::create_dir_all(dir).await?;

    let index = scan(dir).await?;
    let path = match index.get(id) {
        Some(stored) => stored.path.clone(),
        None => {
            let path = index
                .unparsed_for(id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            warn!(id = %id, file = %path.display(), "deleting unparsable event file");
            path.to_path_buf()
        }
    };

    tokio::fs::remove_file(&path).await?;
    info!(id = %id, file = %path.display(), "deleted event");

    Ok(path)
}

/// Remove a stored event's file.
pub async fn remove(stored: &StoredEvent) -> StoreResult<()> {
    tokio::fs::remove_file(&stored.path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventInput;
    use crate::store::create;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    async fn add(dir: &Path, id: &str) {
        create(
            dir,
            EventInput {
                id: Some(id.to_string()),
                name: Some("Cup".to_string()),
                format: Some("Slalom".to_string()),
                date: NaiveDate::from_ymd_opt(2024, 1, 1),
                participants: None,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let tmp = TempDir::new().unwrap();
        add(tmp.path(), "e1").await;

        let removed = delete(tmp.path(), "e1").await.unwrap();

        assert_eq!(removed, tmp.path().join("e1-cup.json"));
        assert!(!removed.exists());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let tmp = TempDir::new().unwrap();
        add(tmp.path(), "e1").await;

        delete(tmp.path(), "e1").await.unwrap();
        let err = delete(tmp.path(), "e1").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(id) if id == "e1"));
    }

    #[tokio::test]
    async fn test_delete_matches_exact_id_only() {
        let tmp = TempDir::new().unwrap();
        add(tmp.path(), "e10").await;

        let err = delete(tmp.path(), "e1").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(tmp.path().join("e10-cup.json").exists());
    }

    #[tokio::test]
    async fn test_delete_falls_back_to_unparsable_file() {
        let tmp = TempDir::new().unwrap();
        let broken = tmp.path().join("e1-spring-cup.json");
        std::fs::write(&broken, "{\"id\":\"e1\",").unwrap();

        let removed = delete(tmp.path(), "e1").await.unwrap();

        assert_eq!(removed, broken);
        assert!(!broken.exists());
        assert!(matches!(
            delete(tmp.path(), "e1").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_rejects_invalid_id() {
        let tmp = TempDir::new().unwrap();

        assert!(matches!(
            delete(tmp.path(), "").await,
            Err(StoreError::InvalidEvent(_))
        ));
        assert!(matches!(
            delete(tmp.path(), "a/b").await,
            Err(StoreError::InvalidEvent(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_on_missing_directory_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("events");

        let err = delete(&dir, "e1").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(dir.is_dir());
    }
}
