//! Id-to-file index built from one directory scan.

use super::StoredEvent;
use crate::error::StoreResult;
use crate::event::Event;
use crate::slug::EVENT_FILE_EXTENSION;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Every readable event in a directory, keyed by the id stored in each file.
///
/// Lookups go through the record content, never the filename, so an id that
/// happens to prefix another id (`e1` vs `e10`) cannot match the wrong file.
/// Record files whose content cannot be read or parsed are kept by path only.
#[derive(Debug, Default)]
pub struct EventIndex {
    entries: Vec<StoredEvent>,
    by_id: HashMap<String, usize>,
    unparsed: Vec<PathBuf>,
}

impl EventIndex {
    pub fn get(&self, id: &str) -> Option<&StoredEvent> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Entries in directory enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredEvent> {
        self.entries.iter()
    }

    /// Record files that could not be read or parsed.
    pub fn unparsed(&self) -> &[PathBuf] {
        &self.unparsed
    }

    /// An unparsable record file named `<id>-...`, if any.
    ///
    /// Only consulted when the content index has no event for `id`.
    pub fn unparsed_for(&self, id: &str) -> Option<&Path> {
        let prefix = format!("{}-", id);
        self.unparsed
            .iter()
            .find(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .map(PathBuf::as_path)
    }

    pub fn into_events(self) -> Vec<Event> {
        self.entries.into_iter().map(|stored| stored.event).collect()
    }

    fn insert(&mut self, stored: StoredEvent) {
        if let Some(&first) = self.by_id.get(&stored.event.id) {
            warn!(
                id = %stored.event.id,
                kept = %self.entries[first].path.display(),
                ignored = %stored.path.display(),
                "duplicate event id, ignoring later file"
            );
            return;
        }

        self.by_id
            .insert(stored.event.id.clone(), self.entries.len());
        self.entries.push(stored);
    }
}

/// Scan `dir` and index every .json file that parses as an event.
///
/// Files that cannot be read or parsed are logged and recorded in
/// `unparsed` instead. This includes files deleted between enumeration and read.
pub async fn scan(dir: &Path) -> StoreResult<EventIndex> {
    let mut index = EventIndex::default();
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        if !path
            .extension()
            .is_some_and(|e| e == EVENT_FILE_EXTENSION)
        {
            continue;
        }

        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            continue;
        }

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable event file");
                index.unparsed.push(path);
                continue;
            }
        };

        match serde_json::from_str::<Event>(&content) {
            Ok(event) => index.insert(StoredEvent { path, event }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping malformed event file");
                index.unparsed.push(path);
            }
        }
    }

    debug!(
        dir = %dir.display(),
        events = index.entries.len(),
        unparsed = index.unparsed.len(),
        "scanned event directory"
    );
    Ok(index)
}
