//! HTTP page handlers for pss-site

pub mod event_detail;
pub mod events;
pub mod health;
pub mod home;
pub mod speakers;
pub mod static_assets;

pub use event_detail::event_detail_page;
pub use events::{events_grid_page, events_page};
pub use health::health_routes;
pub use home::home_page;
pub use speakers::{speaker_detail_page, speakers_grid_fragment, speakers_page};
pub use static_assets::{serve_site_css, serve_site_js};
