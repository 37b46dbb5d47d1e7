//! Events listing and the grid/modal variant

use axum::{
    extract::{Query, State},
    response::Html,
};
use pss_common::fmt::SITE_NAME;
use pss_common::view::events::{self, EventModalView};
use serde::Deserialize;

use crate::html::{escape, page};
use crate::AppState;

/// GET /events
///
/// All events as a simple clickable list, most recent date first
pub async fn events_page(State(state): State<AppState>) -> Html<String> {
    let items: String = events::listing(&state.site)
        .iter()
        .map(|item| {
            format!(
                r#"            <a class="event-simple-item" href="{href}">
                <h2>{display_title}</h2>
                <img src="{flyer}" alt="{title}">
            </a>
"#,
                href = escape(&item.href),
                display_title = escape(&item.display_title),
                flyer = escape(&item.flyer),
                title = escape(&item.title),
            )
        })
        .collect();

    let content = format!(
        r#"        <section class="events-list" id="eventsSimpleList">
{items}        </section>"#,
        items = items
    );

    Html(page(&format!("Events - {}", SITE_NAME), "", &content))
}

/// Query parameters for the grid variant
#[derive(Debug, Deserialize)]
pub struct GridQuery {
    /// Event identifier whose modal overlay should be open
    pub open: Option<String>,
}

/// GET /events/grid?open=ID
///
/// Grid of event cards; a matching `open` identifier renders the modal
/// overlay on top. An unknown identifier renders the bare grid.
pub async fn events_grid_page(
    State(state): State<AppState>,
    Query(query): Query<GridQuery>,
) -> Html<String> {
    let cards: String = events::grid(&state.site)
        .iter()
        .map(|card| {
            format!(
                r#"            <a class="event-card" href="{open_href}">
                <img src="{flyer}" alt="{title}">
                <div class="event-card-content">
                    <h3>{title}</h3>
                    <p class="event-date">{date}</p>
                </div>
            </a>
"#,
                open_href = escape(&card.open_href),
                flyer = escape(&card.flyer),
                title = escape(&card.title),
                date = escape(&card.date),
            )
        })
        .collect();

    let modal = query
        .open
        .as_deref()
        .and_then(|id| events::modal(&state.site, id));

    // Page scrolling is suppressed only while the overlay is open
    let body_class = if modal.is_some() { "modal-open" } else { "" };
    let overlay = modal.map(|m| modal_fragment(&m)).unwrap_or_default();

    let content = format!(
        r#"        <section class="events-grid" id="eventsGrid">
{cards}        </section>
{overlay}"#,
        cards = cards,
        overlay = overlay,
    );

    Html(page(
        &format!("Events - {}", SITE_NAME),
        body_class,
        &content,
    ))
}

/// Write the modal view model into the dismissible overlay.
///
/// The background and the close button both link back to the bare grid;
/// Escape does the same via `site.js`.
fn modal_fragment(modal: &EventModalView) -> String {
    let speakers: String = modal
        .speakers
        .iter()
        .map(|s| {
            format!(
                r#"                    <a href="{href}" class="speaker-link">{name}</a>
"#,
                href = escape(&s.href),
                name = escape(&s.name),
            )
        })
        .collect();

    format!(
        r#"        <div class="modal" id="eventModal" style="display: block" data-close-href="{close}">
            <a class="modal-backdrop" href="{close}" aria-label="Close"></a>
            <div class="modal-content">
                <a class="modal-close" id="closeModal" href="{close}">&times;</a>
                <img src="{flyer}" alt="{title}" id="modalFlyer">
                <h2 id="modalTitle">{title}</h2>
                <p id="modalDate">{date}</p>
                <p id="modalTime">{time}</p>
                <p id="modalLocation">{location}</p>
                <p id="modalBlurb">{blurb}</p>
                <div class="modal-speakers" id="modalSpeakers">
{speakers}                </div>
            </div>
        </div>"#,
        close = escape(&modal.close_href),
        flyer = escape(&modal.flyer),
        title = escape(&modal.title),
        date = escape(&modal.date),
        time = escape(&modal.time),
        location = escape(&modal.location),
        blurb = escape(&modal.blurb),
        speakers = speakers,
    )
}
