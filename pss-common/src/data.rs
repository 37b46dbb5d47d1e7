//! Collection loading and read-only access
//!
//! The two JSON collections are read concurrently once at startup and held
//! immutable for the process lifetime. Loading is all-or-nothing: if either
//! file is missing, unreadable, or malformed, both collections come back
//! empty and every page renders its empty state. Callers cannot distinguish
//! "loaded empty" from "failed"; the failure is only visible in the log.

use std::path::Path;

use tracing::{error, info};

use crate::model::{Event, Speaker};
use crate::Result;

/// Events collection file name within the data directory
pub const EVENTS_FILE: &str = "events.json";

/// Speakers collection file name within the data directory
pub const SPEAKERS_FILE: &str = "speakers.json";

/// The two loaded collections, shared read-only across all page handlers
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub events: Vec<Event>,
    pub speakers: Vec<Speaker>,
}

impl SiteData {
    pub fn new(events: Vec<Event>, speakers: Vec<Speaker>) -> Self {
        Self { events, speakers }
    }

    /// Both collections empty; the fallback outcome for any load failure
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load both collections from `data_dir`.
    ///
    /// Reads `events.json` and `speakers.json` concurrently; succeeds only
    /// if both reads and both parses succeed. Any failure is logged and
    /// collapses to `SiteData::empty()`. Never returns an error: the site
    /// degrades to empty sections rather than failing to start.
    pub async fn load(data_dir: &Path) -> Self {
        match read_collections(data_dir).await {
            Ok((events, speakers)) => {
                info!(
                    "Data loaded successfully: {} events, {} speakers",
                    events.len(),
                    speakers.len()
                );
                Self::new(events, speakers)
            }
            Err(e) => {
                error!("Error loading data from {}: {}", data_dir.display(), e);
                Self::empty()
            }
        }
    }

    /// Look up an event by identifier (first match)
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Look up a speaker by identifier (first match)
    pub fn speaker(&self, id: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == id)
    }

    /// All events, most recent date first.
    ///
    /// Stable sort: ties keep collection order.
    pub fn events_by_date_desc(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Resolve an event's speaker references, in speakers-collection order.
    ///
    /// Dangling identifiers are dropped silently.
    pub fn speakers_for_event(&self, event: &Event) -> Vec<&Speaker> {
        self.speakers
            .iter()
            .filter(|s| event.speakers.iter().any(|id| id == &s.id))
            .collect()
    }

    /// All events referencing a speaker, in events-collection order
    pub fn events_for_speaker(&self, speaker_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.speakers.iter().any(|id| id == speaker_id))
            .collect()
    }
}

/// Read and parse both collection files, concurrently
async fn read_collections(data_dir: &Path) -> Result<(Vec<Event>, Vec<Speaker>)> {
    let (events_bytes, speakers_bytes) = tokio::try_join!(
        tokio::fs::read(data_dir.join(EVENTS_FILE)),
        tokio::fs::read(data_dir.join(SPEAKERS_FILE)),
    )?;

    let events: Vec<Event> = serde_json::from_slice(&events_bytes)?;
    let speakers: Vec<Speaker> = serde_json::from_slice(&speakers_bytes)?;

    Ok((events, speakers))
}
