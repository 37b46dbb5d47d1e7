//! Pure view-model layer
//!
//! Each submodule derives the view model for one page (or page section)
//! from the loaded `SiteData` plus optional transient view state. Nothing
//! here touches HTTP or HTML; the binding layer in `pss-site` writes these
//! models into markup.

pub mod carousel;
pub mod events;
pub mod speakers;
