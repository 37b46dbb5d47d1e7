//! Home page: hero section plus the events flyer carousel
//!
//! The carousel index and viewport-width hint travel as query parameters;
//! prev/next are plain links carrying a re-clamped index, so the state
//! machine in `pss_common::view::carousel` stays the single source of
//! layout truth. `site.js` reloads with a new `w` hint only when a window
//! resize crosses the width breakpoint.

use axum::{
    extract::{Query, State},
    response::Html,
};
use pss_common::fmt::SITE_NAME;
use pss_common::view::carousel::{self, CarouselState, CarouselView};
use serde::Deserialize;

use crate::html::{control_opacity, escape, page};
use crate::AppState;

/// Default viewport-width hint when the client has not supplied one
const DEFAULT_VIEWPORT_PX: u32 = 1024;

/// Query parameters for the home page
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Carousel index (clamped server-side)
    #[serde(default)]
    pub slide: usize,

    /// Viewport width hint in logical pixels
    #[serde(default = "default_viewport")]
    pub w: u32,
}

fn default_viewport() -> u32 {
    DEFAULT_VIEWPORT_PX
}

/// GET /?slide=N&w=W
///
/// Home page with the flyer carousel, most recent event first
pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Html<String> {
    let view = carousel::render(&state.site, CarouselState::new(query.slide, query.w));

    let content = format!(
        r#"        <section class="hero">
            <h1>{site_name}</h1>
            <p class="hero-subtitle">A free school for collective study</p>
        </section>
        <section class="carousel-section">
{carousel}
        </section>"#,
        site_name = escape(SITE_NAME),
        carousel = carousel_fragment(&view, query.w),
    );

    Html(page(SITE_NAME, "", &content))
}

/// Write the carousel view model into its markup fragment.
///
/// An empty collection leaves the track empty; the controls render but
/// both sit dimmed.
fn carousel_fragment(view: &CarouselView, viewport_px: u32) -> String {
    let items: String = view
        .slides
        .iter()
        .map(|slide| {
            format!(
                r#"                    <a class="carousel-item" href="{href}">
                        <img src="{flyer}" alt="{title}">
                    </a>
"#,
                href = escape(&slide.href),
                flyer = escape(&slide.flyer),
                title = escape(&slide.title),
            )
        })
        .collect();

    let prev_slide = view.state.index.saturating_sub(1);
    let next_slide = view.state.index + 1;

    format!(
        r#"            <div class="carousel">
                <a class="carousel-control" id="prevBtn" style="opacity: {prev_opacity}"
                   href="/?slide={prev_slide}&amp;w={w}">&#8249;</a>
                <div class="carousel-viewport">
                    <div class="carousel-track" id="carouselTrack"
                         style="transform: translateX(-{offset}px)">
{items}                    </div>
                </div>
                <a class="carousel-control" id="nextBtn" style="opacity: {next_opacity}"
                   href="/?slide={next_slide}&amp;w={w}">&#8250;</a>
            </div>"#,
        prev_opacity = control_opacity(view.prev_enabled),
        next_opacity = control_opacity(view.next_enabled),
        prev_slide = prev_slide,
        next_slide = next_slide,
        w = viewport_px,
        offset = view.offset_px,
        items = items,
    )
}
