//! # PSS Common Library
//!
//! Shared code for the People's Saturday School site:
//! - Event/Speaker data model
//! - JSON collection loader
//! - Display formatting (dates, topic titles, marquee text)
//! - Configuration resolution
//! - Pure view-model layer (no HTTP or HTML coupling)

pub mod config;
pub mod data;
pub mod error;
pub mod fmt;
pub mod model;
pub mod view;

pub use data::SiteData;
pub use error::{Error, Result};
