//! Events listing, detail, grid, and modal view models

use crate::fmt;
use crate::SiteData;

/// One entry in the simple clickable listing
#[derive(Debug, Clone, PartialEq)]
pub struct EventListItem {
    pub id: String,
    /// `"<long-form date> | <topic>"`
    pub display_title: String,
    pub flyer: String,
    pub title: String,
    pub href: String,
}

/// All events as listing entries, most recent date first
pub fn listing(data: &SiteData) -> Vec<EventListItem> {
    data.events_by_date_desc()
        .iter()
        .map(|event| EventListItem {
            id: event.id.clone(),
            display_title: format!(
                "{} | {}",
                fmt::long_date(event.date),
                fmt::topic(&event.title)
            ),
            flyer: event.flyer.clone(),
            title: event.title.clone(),
            href: detail_href(&event.id),
        })
        .collect()
}

/// A resolved speaker shown on an event detail page
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerCard {
    pub name: String,
    pub headshot: String,
    pub href: String,
}

/// Everything the event detail binder populates
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetailView {
    pub flyer: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub blurb: String,
    /// Decorative border text, long enough for a continuous scroll
    pub marquee: String,
    pub speakers: Vec<SpeakerCard>,
    pub page_title: String,
}

/// Derive the detail view for one event; `None` on lookup miss (the page
/// stays in its pre-render state).
pub fn detail(data: &SiteData, id: &str) -> Option<EventDetailView> {
    let event = data.event(id)?;

    let speakers = data
        .speakers_for_event(event)
        .iter()
        .map(|s| SpeakerCard {
            name: s.name.clone(),
            headshot: s.headshot.clone(),
            href: speaker_href(&s.id),
        })
        .collect();

    Some(EventDetailView {
        flyer: event.flyer.clone(),
        date: fmt::long_date(event.date),
        time: event.time.clone(),
        location: event.location.clone(),
        blurb: event.blurb.clone(),
        marquee: fmt::marquee(&event.title),
        speakers,
        page_title: fmt::page_title(&event.title),
    })
}

/// One card in the grid variant of the events page
#[derive(Debug, Clone, PartialEq)]
pub struct GridCard {
    pub id: String,
    pub title: String,
    pub flyer: String,
    pub date: String,
    /// Opens the modal overlay for this event
    pub open_href: String,
}

/// All events as grid cards, most recent date first
pub fn grid(data: &SiteData) -> Vec<GridCard> {
    data.events_by_date_desc()
        .iter()
        .map(|event| GridCard {
            id: event.id.clone(),
            title: event.title.clone(),
            flyer: event.flyer.clone(),
            date: fmt::long_date(event.date),
            open_href: format!("/events/grid?open={}", event.id),
        })
        .collect()
}

/// A speaker name link inside the modal overlay
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerLink {
    pub name: String,
    pub href: String,
}

/// The dismissible overlay duplicating the detail rendering
#[derive(Debug, Clone, PartialEq)]
pub struct EventModalView {
    pub flyer: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub blurb: String,
    pub speakers: Vec<SpeakerLink>,
    /// Dismissal target; restores normal page scrolling
    pub close_href: String,
}

/// Derive the modal view for one event; `None` on lookup miss
pub fn modal(data: &SiteData, id: &str) -> Option<EventModalView> {
    let event = data.event(id)?;

    let speakers = data
        .speakers_for_event(event)
        .iter()
        .map(|s| SpeakerLink {
            name: s.name.clone(),
            href: speaker_href(&s.id),
        })
        .collect();

    Some(EventModalView {
        flyer: event.flyer.clone(),
        title: event.title.clone(),
        date: fmt::long_date(event.date),
        time: event.time.clone(),
        location: event.location.clone(),
        blurb: event.blurb.clone(),
        speakers,
        close_href: "/events/grid".to_string(),
    })
}

pub(crate) fn detail_href(event_id: &str) -> String {
    format!("/event?id={}", event_id)
}

pub(crate) fn speaker_href(speaker_id: &str) -> String {
    format!("/speaker?id={}", speaker_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, Speaker};
    use chrono::NaiveDate;

    fn sample() -> SiteData {
        let e1 = Event {
            id: "e1".to_string(),
            title: "The People's Saturday School: Topic A".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: "2:00 PM".to_string(),
            location: "Brooklyn Library".to_string(),
            flyer: "assets/e1.jpg".to_string(),
            blurb: "A session on Topic A.".to_string(),
            speakers: vec!["s1".to_string()],
        };
        let e2 = Event {
            id: "e2".to_string(),
            title: "The People's Saturday School: Topic B".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            time: "3:00 PM".to_string(),
            location: "Harlem".to_string(),
            flyer: "assets/e2.jpg".to_string(),
            blurb: String::new(),
            speakers: vec!["s1".to_string(), "ghost".to_string()],
        };
        let s1 = Speaker {
            id: "s1".to_string(),
            name: "Jane Doe".to_string(),
            title: "Historian".to_string(),
            headshot: "assets/s1.jpg".to_string(),
            bio: String::new(),
            books: vec![],
        };
        SiteData::new(vec![e1, e2], vec![s1])
    }

    #[test]
    fn test_listing_sorted_and_formatted() {
        let items = listing(&sample());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display_title, "February 10, 2024 | Topic B");
        assert_eq!(items[1].display_title, "January 1, 2024 | Topic A");
        assert_eq!(items[0].href, "/event?id=e2");
    }

    #[test]
    fn test_listing_empty_collection() {
        assert!(listing(&SiteData::empty()).is_empty());
    }

    #[test]
    fn test_detail_populates_matching_record() {
        let view = detail(&sample(), "e1").unwrap();
        assert_eq!(view.flyer, "assets/e1.jpg");
        assert_eq!(view.date, "January 1, 2024");
        assert_eq!(view.time, "2:00 PM");
        assert_eq!(view.location, "Brooklyn Library");
        assert_eq!(view.blurb, "A session on Topic A.");
        assert_eq!(
            view.page_title,
            "The People's Saturday School: Topic A - The People's Saturday School"
        );

        assert_eq!(view.speakers.len(), 1);
        assert_eq!(view.speakers[0].name, "Jane Doe");
        assert_eq!(view.speakers[0].href, "/speaker?id=s1");
    }

    #[test]
    fn test_detail_marquee() {
        let view = detail(&sample(), "e1").unwrap();
        assert!(view.marquee.starts_with("TOPIC A \u{2022} "));
        assert_eq!(view.marquee.matches("TOPIC A").count(), 10);
    }

    #[test]
    fn test_detail_lookup_miss() {
        assert!(detail(&sample(), "e9").is_none());
    }

    #[test]
    fn test_detail_drops_dangling_speaker_ids() {
        let view = detail(&sample(), "e2").unwrap();
        let names: Vec<&str> = view.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe"]);
    }

    #[test]
    fn test_grid_cards() {
        let cards = grid(&sample());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "e2");
        assert_eq!(cards[0].date, "February 10, 2024");
        assert_eq!(cards[0].open_href, "/events/grid?open=e2");
    }

    #[test]
    fn test_modal_view() {
        let view = modal(&sample(), "e1").unwrap();
        assert_eq!(view.title, "The People's Saturday School: Topic A");
        assert_eq!(view.speakers[0].name, "Jane Doe");
        assert_eq!(view.close_href, "/events/grid");
        assert!(modal(&sample(), "e9").is_none());
    }
}
