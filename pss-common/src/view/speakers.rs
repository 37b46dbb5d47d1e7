//! Speakers grid, live name search, and speaker detail view models

use crate::fmt;
use crate::view::events::speaker_href;
use crate::SiteData;

/// One card in the speakers grid
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerCardView {
    pub id: String,
    pub name: String,
    /// Role/affiliation string
    pub title: String,
    pub headshot: String,
    /// Comma-joined topics of every event referencing this speaker
    pub sessions: String,
    pub href: String,
}

/// Derive the grid for the given search query.
///
/// Case-insensitive substring match against name only; the empty query
/// selects every speaker. Non-destructive: the source collection is never
/// mutated, and re-applying the same query yields the same cards.
pub fn grid(data: &SiteData, query: &str) -> Vec<SpeakerCardView> {
    let query = query.to_lowercase();

    data.speakers
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&query))
        .map(|speaker| {
            let sessions = data
                .events_for_speaker(&speaker.id)
                .iter()
                .map(|e| fmt::topic(&e.title))
                .collect::<Vec<_>>()
                .join(", ");

            SpeakerCardView {
                id: speaker.id.clone(),
                name: speaker.name.clone(),
                title: speaker.title.clone(),
                headshot: speaker.headshot.clone(),
                sessions,
                href: speaker_href(&speaker.id),
            }
        })
        .collect()
}

/// A published work card in the selected-works section
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub title: String,
    pub cover_image: String,
    /// External link, opened in a new browsing context
    pub link: String,
}

/// Everything the speaker detail binder populates
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerDetailView {
    pub name: String,
    pub title: String,
    pub headshot: String,
    pub bio: String,
    /// Empty keeps the selected-works section hidden
    pub books: Vec<BookCard>,
    pub page_title: String,
}

/// Derive the detail view for one speaker; `None` on lookup miss
pub fn detail(data: &SiteData, id: &str) -> Option<SpeakerDetailView> {
    let speaker = data.speaker(id)?;

    let books = speaker
        .books
        .iter()
        .map(|b| BookCard {
            title: b.title.clone(),
            cover_image: b.cover_image.clone(),
            link: b.link.clone(),
        })
        .collect();

    Some(SpeakerDetailView {
        name: speaker.name.clone(),
        title: speaker.title.clone(),
        headshot: speaker.headshot.clone(),
        bio: speaker.bio.clone(),
        books,
        page_title: fmt::page_title(&speaker.name),
    })
}
