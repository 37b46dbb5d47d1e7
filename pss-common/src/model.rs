//! Data model for the two site collections
//!
//! Records are deserialized once from `events.json` / `speakers.json` and
//! never mutated afterward. `Event.speakers` joins against `Speaker.id` by
//! plain string identifier; a dangling id simply yields no match when
//! resolved, so no referential integrity is enforced here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within the events collection
    pub id: String,
    /// Full title, carrying the fixed site prefix (see `fmt::TITLE_PREFIX`)
    pub title: String,
    /// Calendar date, no time-zone semantics
    pub date: NaiveDate,
    /// Free-text display string, e.g. "2:00 PM - 4:00 PM"
    pub time: String,
    /// Free-text venue description
    pub location: String,
    /// Flyer image reference
    pub flyer: String,
    /// Free-text description
    pub blurb: String,
    /// Referential speaker identifiers (existence not enforced)
    #[serde(default)]
    pub speakers: Vec<String>,
}

/// A presenter record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Unique identifier within the speakers collection
    pub id: String,
    pub name: String,
    /// Role/affiliation string
    pub title: String,
    /// Headshot image reference
    pub headshot: String,
    /// Free-text biography
    pub bio: String,
    /// Published works, possibly empty
    #[serde(default)]
    pub books: Vec<Book>,
}

/// A published work attributed to a speaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(rename = "coverImage")]
    pub cover_image: String,
    pub link: String,
}
