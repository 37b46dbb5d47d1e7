//! Event detail page

use axum::{
    extract::{Query, State},
    response::Html,
};
use pss_common::fmt::SITE_NAME;
use pss_common::view::events::{self, EventDetailView};
use serde::Deserialize;

use crate::html::{escape, page};
use crate::AppState;

/// Query parameters for a detail page
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
}

/// GET /event?id=ID
///
/// Detail view for one event. A missing or unknown identifier is a silent
/// no-op: the shell renders with empty containers and the default title.
pub async fn event_detail_page(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Html<String> {
    let view = query
        .id
        .as_deref()
        .and_then(|id| events::detail(&state.site, id));

    match view {
        Some(view) => {
            let title = view.page_title.clone();
            Html(page(&title, "", &detail_fragment(&view)))
        }
        None => Html(page(SITE_NAME, "", EMPTY_DETAIL)),
    }
}

/// Pre-render state of the detail page: containers present, nothing bound
const EMPTY_DETAIL: &str = r#"        <section class="event-detail">
            <div class="marquee" id="borderTextTop"></div>
            <div class="event-detail-body">
                <div class="event-detail-info" id="eventDetail"></div>
                <div class="event-speakers" id="eventSpeakersLarge"></div>
            </div>
            <div class="marquee" id="borderTextBottom"></div>
        </section>"#;

fn detail_fragment(view: &EventDetailView) -> String {
    let speakers: String = view
        .speakers
        .iter()
        .map(|s| {
            format!(
                r#"                    <a href="{href}" class="event-speaker-card">
                        <img src="{headshot}" alt="{name}">
                        <h4>{name}</h4>
                    </a>
"#,
                href = escape(&s.href),
                headshot = escape(&s.headshot),
                name = escape(&s.name),
            )
        })
        .collect();

    let marquee = escape(&view.marquee);

    format!(
        r#"        <section class="event-detail">
            <div class="marquee" id="borderTextTop"><span>{marquee}</span></div>
            <div class="event-detail-body">
                <div class="event-detail-info" id="eventDetail">
                    <img src="{flyer}" alt="Event flyer" id="eventFlyerLarge">
                    <p class="event-date" id="eventDateLarge">{date}</p>
                    <p class="event-time" id="eventTimeLarge">{time}</p>
                    <p class="event-location" id="eventLocationLarge">{location}</p>
                    <p class="event-blurb" id="eventBlurbLarge">{blurb}</p>
                </div>
                <div class="event-speakers" id="eventSpeakersLarge">
{speakers}                </div>
            </div>
            <div class="marquee" id="borderTextBottom"><span>{marquee}</span></div>
        </section>"#,
        marquee = marquee,
        flyer = escape(&view.flyer),
        date = escape(&view.date),
        time = escape(&view.time),
        location = escape(&view.location),
        blurb = escape(&view.blurb),
        speakers = speakers,
    )
}
