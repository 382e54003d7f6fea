//! Create event files in the store directory.

use super::{StoredEvent, scan, write_event};
use crate::error::{StoreError, StoreResult};
use crate::event::EventInput;
use crate::slug::event_filename;
use std::path::Path;
use tracing::info;

/// Create a new event file in the store directory.
///
/// The filename is derived from the event's id and name. Fails with
/// `AlreadyExists` if an event with the same id is already stored (including
/// an unparsable `<id>-*.json` file), and with `FilenameConflict` if the
/// derived file is taken by some other record.
pub async fn create(dir: &Path, input: EventInput) -> StoreResult<StoredEvent> {
    let event = input.into_new_event()?;

    tokio::fs::create_dir_all(dir).await?;

    let index = scan(dir).await?;
    if index.contains(&event.id) || index.unparsed_for(&event.id).is_some() {
        return Err(StoreError::AlreadyExists(event.id));
    }

    let filename = event_filename(&event.id, &event.name);
    let path = dir.join(&filename);
    if tokio::fs::try_exists(&path).await? {
        return Err(StoreError::FilenameConflict(filename));
    }

    write_event(&path, &event).await?;
    info!(id = %event.id, file = %filename, "created event");

    Ok(StoredEvent { path, event })
}
