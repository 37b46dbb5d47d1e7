//! Integration tests for the collection loader
//!
//! Exercises the all-or-nothing load contract against real files on disk:
//! success, missing file, and malformed JSON all settle before any page
//! binder would run, and every failure collapses to empty collections.

use std::path::Path;

use pss_common::data::{EVENTS_FILE, SPEAKERS_FILE};
use pss_common::SiteData;
use tempfile::TempDir;

const EVENTS_JSON: &str = r#"[
    {
        "id": "e1",
        "title": "The People's Saturday School: Topic A",
        "date": "2024-01-01",
        "time": "2:00 PM - 4:00 PM",
        "location": "Brooklyn Public Library",
        "flyer": "assets/events/e1.jpg",
        "blurb": "A session on Topic A.",
        "speakers": ["s1"]
    },
    {
        "id": "e2",
        "title": "The People's Saturday School: Topic B",
        "date": "2023-11-18",
        "time": "1:00 PM",
        "location": "Harlem",
        "flyer": "assets/events/e2.jpg",
        "blurb": "",
        "speakers": []
    }
]"#;

const SPEAKERS_JSON: &str = r#"[
    {
        "id": "s1",
        "name": "Jane Doe",
        "title": "Historian",
        "headshot": "assets/speakers/s1.jpg",
        "bio": "Writes about people's history.",
        "books": [
            {
                "title": "A People's History",
                "coverImage": "assets/books/b1.jpg",
                "link": "https://example.com/b1"
            }
        ]
    }
]"#;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("Should write fixture file");
}

#[tokio::test]
async fn test_load_success() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), EVENTS_FILE, EVENTS_JSON);
    write(dir.path(), SPEAKERS_FILE, SPEAKERS_JSON);

    let data = SiteData::load(dir.path()).await;

    assert_eq!(data.events.len(), 2);
    assert_eq!(data.speakers.len(), 1);

    let event = data.event("e1").expect("e1 should load");
    assert_eq!(event.title, "The People's Saturday School: Topic A");
    assert_eq!(event.date.to_string(), "2024-01-01");
    assert_eq!(event.speakers, vec!["s1".to_string()]);

    let speaker = data.speaker("s1").expect("s1 should load");
    assert_eq!(speaker.name, "Jane Doe");
    assert_eq!(speaker.books.len(), 1);
    assert_eq!(speaker.books[0].cover_image, "assets/books/b1.jpg");
}

#[tokio::test]
async fn test_load_missing_books_defaults_empty() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), EVENTS_FILE, "[]");
    write(
        dir.path(),
        SPEAKERS_FILE,
        r#"[{"id": "s1", "name": "Jane Doe", "title": "Historian",
             "headshot": "h.jpg", "bio": ""}]"#,
    );

    let data = SiteData::load(dir.path()).await;
    assert!(data.speaker("s1").unwrap().books.is_empty());
}

#[tokio::test]
async fn test_load_missing_file_yields_empty_pair() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), EVENTS_FILE, EVENTS_JSON);
    // speakers.json absent

    let data = SiteData::load(dir.path()).await;

    // All-or-nothing: the events file parsed fine but both come back empty
    assert!(data.events.is_empty());
    assert!(data.speakers.is_empty());
}

#[tokio::test]
async fn test_load_malformed_json_yields_empty_pair() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), EVENTS_FILE, "{not valid json");
    write(dir.path(), SPEAKERS_FILE, SPEAKERS_JSON);

    let data = SiteData::load(dir.path()).await;

    assert!(data.events.is_empty());
    assert!(data.speakers.is_empty());
}

#[tokio::test]
async fn test_load_missing_directory_yields_empty_pair() {
    let data = SiteData::load(Path::new("/nonexistent/pss-data")).await;
    assert!(data.events.is_empty());
    assert!(data.speakers.is_empty());
}
