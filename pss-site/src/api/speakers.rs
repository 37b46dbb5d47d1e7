//! Speakers grid with live name search, and the speaker detail page

use axum::{
    extract::{Query, State},
    response::Html,
};
use pss_common::fmt::SITE_NAME;
use pss_common::view::speakers::{self, SpeakerCardView, SpeakerDetailView};
use serde::Deserialize;

use super::event_detail::DetailQuery;
use crate::html::{escape, page};
use crate::AppState;

/// Query parameters for the speakers grid
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against speaker names
    #[serde(default)]
    pub q: String,
}

/// GET /speakers?q=QUERY
///
/// Grid of speaker cards, filtered by the search query. The search box
/// re-fetches the grid fragment on every keystroke via `site.js`.
pub async fn speakers_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let cards = speakers::grid(&state.site, &query.q);

    let content = format!(
        r#"        <section class="speakers-section">
            <input type="search" id="speakersSearch" class="speakers-search"
                   placeholder="Search speakers by name" value="{q}">
            <div class="speakers-grid" id="speakersGrid">
{cards}            </div>
        </section>"#,
        q = escape(&query.q),
        cards = grid_fragment(&cards),
    );

    Html(page(&format!("Speakers - {}", SITE_NAME), "", &content))
}

/// GET /api/speakers/grid?q=QUERY
///
/// The grid fragment alone, re-rendered per keystroke (no debounce)
pub async fn speakers_grid_fragment(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let cards = speakers::grid(&state.site, &query.q);
    Html(grid_fragment(&cards))
}

fn grid_fragment(cards: &[SpeakerCardView]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                r#"                <a href="{href}" class="speaker-card">
                    <img src="{headshot}" alt="{name}">
                    <div class="speaker-card-content">
                        <h3>{name}</h3>
                        <p class="title">{title}</p>
                        <p class="session-title"><strong>Session:</strong> {sessions}</p>
                    </div>
                </a>
"#,
                href = escape(&card.href),
                headshot = escape(&card.headshot),
                name = escape(&card.name),
                title = escape(&card.title),
                sessions = escape(&card.sessions),
            )
        })
        .collect()
}

/// GET /speaker?id=ID
///
/// Detail view for one speaker. A missing or unknown identifier renders
/// the shell with empty containers and the default title.
pub async fn speaker_detail_page(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Html<String> {
    let view = query
        .id
        .as_deref()
        .and_then(|id| speakers::detail(&state.site, id));

    match view {
        Some(view) => {
            let title = view.page_title.clone();
            Html(page(&title, "", &detail_fragment(&view)))
        }
        None => Html(page(SITE_NAME, "", EMPTY_DETAIL)),
    }
}

/// Pre-render state of the speaker detail page
const EMPTY_DETAIL: &str = r#"        <section class="speaker-detail">
            <div class="speaker-detail-info" id="speakerDetail"></div>
        </section>"#;

fn detail_fragment(view: &SpeakerDetailView) -> String {
    // The selected-works section only appears when works exist
    let works = if view.books.is_empty() {
        String::new()
    } else {
        let books: String = view
            .books
            .iter()
            .map(|book| {
                format!(
                    r#"                    <a href="{link}" class="book-item" target="_blank" rel="noopener noreferrer">
                        <img src="{cover}" alt="{title}">
                        <h4>{title}</h4>
                    </a>
"#,
                    link = escape(&book.link),
                    cover = escape(&book.cover_image),
                    title = escape(&book.title),
                )
            })
            .collect();

        format!(
            r#"            <div class="selected-works" id="selectedWorks" style="display: block">
                <h3>Selected Works</h3>
                <div class="books-grid" id="booksGrid">
{books}                </div>
            </div>"#,
            books = books
        )
    };

    format!(
        r#"        <section class="speaker-detail">
            <div class="speaker-detail-info" id="speakerDetail">
                <img src="{headshot}" alt="{name}" id="speakerHeadshot">
                <h1 id="speakerName">{name}</h1>
                <p class="title" id="speakerTitle">{title}</p>
                <p class="bio" id="speakerBio">{bio}</p>
            </div>
{works}
        </section>"#,
        headshot = escape(&view.headshot),
        name = escape(&view.name),
        title = escape(&view.title),
        bio = escape(&view.bio),
        works = works,
    )
}
