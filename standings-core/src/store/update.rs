//! Update event files in the store directory.

use super::{StoredEvent, remove, scan, write_event};
use crate::error::{StoreError, StoreResult};
use crate::event::EventInput;
use crate::slug::{event_filename, validate_id};
use std::path::Path;
use tracing::info;

/// Replace an existing event, found by the id in `input`.
///
/// Fails with `NotFound` (and writes nothing) if no event has that id.
/// If the name changed, the file is renamed to match the new slug: the new
/// file is written first, then the old one removed.
pub async fn update(dir: &Path, input: EventInput) -> StoreResult<StoredEvent> {
    let id = input
        .supplied_id()
        .ok_or_else(|| StoreError::InvalidEvent("missing field 'id'".into()))?
        .to_string();

    tokio::fs::create_dir_all(dir).await?;

    let index = scan(dir).await?;
    let existing = index.get(&id).ok_or_else(|| StoreError::NotFound(id.clone()))?;

    let event = input.into_replacement(&existing.event);
    validate_id(&event.id)?;

    let filename = event_filename(&event.id, &event.name);
    let path = dir.join(&filename);

    if path == existing.path {
        write_event(&path, &event).await?;
        info!(id = %event.id, file = %filename, "updated event");
    } else {
        if tokio::fs::try_exists(&path).await? {
            return Err(StoreError::FilenameConflict(filename));
        }

        write_event(&path, &event).await?;
        remove(existing).await?;
        info!(
            id = %event.id,
            from = %existing.path.display(),
            file = %filename,
            "updated and renamed event"
        );
    }

    Ok(StoredEvent { path, event })
}
