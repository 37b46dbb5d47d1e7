//! Static asset handlers for the pss-site UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const SITE_CSS: &str = include_str!("../../static/site.css");
const SITE_JS: &str = include_str!("../../static/site.js");

/// GET /static/site.css
///
/// Serves the site styles
pub async fn serve_site_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        SITE_CSS,
    )
        .into_response()
}

/// GET /static/site.js
///
/// Serves the small client shim (nav toggle, Escape-to-close, live search
/// fetch, resize width hint). All rendering decisions stay server-side.
pub async fn serve_site_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        SITE_JS,
    )
        .into_response()
}
