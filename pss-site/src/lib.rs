//! pss-site library - People's Saturday School web module
//!
//! Server-rendered event/speaker site. The two JSON collections are loaded
//! once at startup (see `pss_common::SiteData`); every page handler is a
//! thin binding of a pure view model into HTML.

use std::sync::Arc;

use axum::Router;
use pss_common::SiteData;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod html;

/// Application state shared across page handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded collections, written once before the router serves anything
    pub site: Arc<SiteData>,
}

impl AppState {
    /// Create new application state
    pub fn new(site: SiteData) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}

/// Build application router
///
/// The route table is the page router: one entry per page identifier,
/// registered once, plus the health endpoint and embedded static assets.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::home_page))
        .route("/events", get(api::events_page))
        .route("/events/grid", get(api::events_grid_page))
        .route("/event", get(api::event_detail_page))
        .route("/speakers", get(api::speakers_page))
        .route("/api/speakers/grid", get(api::speakers_grid_fragment))
        .route("/speaker", get(api::speaker_detail_page))
        .route("/static/site.css", get(api::serve_site_css))
        .route("/static/site.js", get(api::serve_site_js))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
