//! Local event file storage.
//!
//! Manages storing and retrieving events as `<id>-<slug>.json` files in a
//! single flat directory. Nothing is cached between calls: every operation
//! scans the directory again, so the store always reflects what is on disk.

mod create;
mod delete;
mod index;
mod list;
mod update;

pub use create::create;
pub use delete::{delete, remove};
pub use index::{EventIndex, scan};
pub use list::list;
pub use update::update;

use crate::error::StoreResult;
use crate::event::{Event, EventInput};
use std::path::{Path, PathBuf};

/// An event together with the file it was read from or written to.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    /// Path to the .json file
    pub path: PathBuf,
    /// The event data
    pub event: Event,
}

/// Event record store rooted at one directory.
///
/// The directory is created lazily by each operation, so pointing the store
/// at a path that does not exist yet is fine.
#[derive(Debug, Clone)]
pub struct EventStore {
    dir: PathBuf,
}

impl EventStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        EventStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All stored events, in directory order.
    pub async fn list(&self) -> StoreResult<Vec<Event>> {
        list(&self.dir).await
    }

    /// Store a new event. Fails if an event with the same id exists.
    pub async fn create(&self, input: EventInput) -> StoreResult<Event> {
        Ok(create(&self.dir, input).await?.event)
    }

    /// Replace an existing event, looked up by the id in `input`.
    pub async fn upsert(&self, input: EventInput) -> StoreResult<Event> {
        Ok(update(&self.dir, input).await?.event)
    }

    /// Delete the event with exactly this id.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        delete(&self.dir, id).await.map(|_| ())
    }

    /// Delete every record file, unparsable ones included, returning how
    /// many were removed.
    pub async fn clear(&self) -> StoreResult<usize> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let index = scan(&self.dir).await?;

        let mut removed = 0;
        for stored in index.iter() {
            remove(stored).await?;
            removed += 1;
        }

        for path in index.unparsed() {
            match tokio::fs::remove_file(path).await {
                Ok(()) => removed += 1,
                // Already gone since the scan
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(removed)
    }
}

/// Serialize an event and write it to `path`, replacing any existing content.
pub(crate) async fn write_event(path: &Path, event: &Event) -> StoreResult<()> {
    let content = serde_json::to_string_pretty(event)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}
