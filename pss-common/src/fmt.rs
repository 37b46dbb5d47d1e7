//! Display formatting shared by every page
//!
//! Provides consistent title, date, and marquee formatting across the
//! listing, detail, and grid views.

use chrono::NaiveDate;

/// Fixed descriptive prefix carried by every event title in the collection
pub const TITLE_PREFIX: &str = "The People's Saturday School: ";

/// Site name, appended to detail page titles
pub const SITE_NAME: &str = "The People's Saturday School";

/// Marquee separator between topic repetitions
const MARQUEE_SEPARATOR: &str = " \u{2022} ";

/// Repetitions guaranteeing enough length for a continuous scroll
/// regardless of container width
const MARQUEE_REPEAT: usize = 10;

/// Extract the topic from an event title by stripping the fixed prefix.
///
/// Titles without the prefix pass through unchanged.
///
/// # Examples
///
/// ```
/// use pss_common::fmt::topic;
///
/// assert_eq!(topic("The People's Saturday School: Radical Care"), "Radical Care");
/// assert_eq!(topic("Standalone Title"), "Standalone Title");
/// ```
pub fn topic(title: &str) -> &str {
    title.strip_prefix(TITLE_PREFIX).unwrap_or(title)
}

/// Format a date in en-US long form, e.g. "January 1, 2024".
///
/// Fixed locale; internationalization is out of scope.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Build the decorative marquee string for an event title: topic
/// upper-cased, followed by a bullet separator, repeated enough times
/// for a continuous scrolling animation.
pub fn marquee(title: &str) -> String {
    let unit = format!("{}{}", topic(title).to_uppercase(), MARQUEE_SEPARATOR);
    unit.repeat(MARQUEE_REPEAT)
}

/// Full page title for a detail page, e.g. "Jane Doe - The People's Saturday School"
pub fn page_title(subject: &str) -> String {
    format!("{} - {}", subject, SITE_NAME)
}
