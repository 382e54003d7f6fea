//! Event record types.
//!
//! An `Event` is one competition round and its results. It is what gets
//! written to disk, one JSON file per event. `EventInput` is the loose
//! shape callers send in, where every field may be missing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::slug::validate_id;

/// A stored event record.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Free-form label, e.g. "Slalom Racing"
    pub format: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// One participant result within an event.
///
/// The store never inspects these; duplicate names or gaps in positions are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub position: i64,
}

/// Event data as supplied by a caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub format: Option<String>,
    pub date: Option<NaiveDate>,
    pub participants: Option<Vec<Participant>>,
}

impl EventInput {
    /// The caller-supplied id, treating an empty string as absent.
    pub fn supplied_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Build a brand new event, assigning an id when none was supplied.
    pub fn into_new_event(self) -> StoreResult<Event> {
        let id = match self.supplied_id() {
            Some(id) => id.to_string(),
            None => generate_id(),
        };
        validate_id(&id)?;

        Ok(Event {
            id,
            name: required(self.name, "name")?,
            format: required(self.format, "format")?,
            date: self
                .date
                .ok_or_else(|| StoreError::InvalidEvent("missing field 'date'".into()))?,
            participants: self.participants.unwrap_or_default(),
        })
    }

    /// Build the replacement for `existing`.
    ///
    /// Omitted name/format/date keep their stored values. Omitted participants
    /// become an empty list.
    pub fn into_replacement(self, existing: &Event) -> Event {
        Event {
            id: existing.id.clone(),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            format: self.format.unwrap_or_else(|| existing.format.clone()),
            date: self.date.unwrap_or(existing.date),
            participants: self.participants.unwrap_or_default(),
        }
    }
}

/// Fresh identifier for events created without one.
///
/// UUID v7 keeps ids roughly time-ordered without the same-millisecond
/// collisions a bare timestamp would have.
pub fn generate_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

fn required(value: Option<String>, field: &str) -> StoreResult<String> {
    value.ok_or_else(|| StoreError::InvalidEvent(format!("missing field '{}'", field)))
}
