//! Flat-file event storage.
//!
//! The entire database is one JSON file holding an array of events. Every
//! operation reads the whole file, works on the list in memory, and rewrites
//! the file. There is no locking; the store serves one small deployment.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::error::{ClubcalError, ClubcalResult};
use crate::event::{Event, EventDraft};
use crate::month::Month;

/// Handle to the events JSON file.
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all events in file order. A missing file reads as an empty list.
    pub fn load(&self) -> ClubcalResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| ClubcalError::Serialization(e.to_string()))
    }

    /// Rewrite the whole file, creating parent directories as needed.
    pub fn save(&self, events: &[Event]) -> ClubcalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| ClubcalError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }

    /// Append a new event, assigning it a fresh id.
    pub fn add(&self, draft: EventDraft) -> ClubcalResult<Event> {
        draft.validate()?;

        let mut events = self.load()?;
        let event = draft.into_event(assign_id(&events));
        events.push(event.clone());
        self.save(&events)?;

        Ok(event)
    }

    /// Delete by id, reporting whether anything was removed.
    /// Deleting an absent id is not an error.
    pub fn delete(&self, id: &str) -> ClubcalResult<bool> {
        let mut events = self.load()?;
        let before = events.len();
        events.retain(|e| e.id != id);

        if events.len() == before {
            return Ok(false);
        }

        self.save(&events)?;
        Ok(true)
    }

    /// Events starting on the given day, sorted by start time.
    pub fn events_on(&self, day: NaiveDate) -> ClubcalResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .load()?
            .into_iter()
            .filter(|e| e.starts_on(day))
            .collect();
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }

    /// Events starting within the given month, sorted by start time.
    pub fn events_in(&self, month: &Month) -> ClubcalResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .load()?
            .into_iter()
            .filter(|e| e.starts_in(month))
            .collect();
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }
}

/// Assign an id from the current Unix time in milliseconds.
fn assign_id(events: &[Event]) -> String {
    unique_id(Utc::now().timestamp_millis(), events)
}

/// Turn a millisecond timestamp into an id, bumping by one millisecond
/// while it collides with a stored id.
fn unique_id(mut millis: i64, events: &[Event]) -> String {
    loop {
        let id = millis.to_string();
        if !events.iter().any(|e| e.id == id) {
            return id;
        }
        millis += 1;
    }
}
