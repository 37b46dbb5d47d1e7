//! HTML assembly helpers
//!
//! Fragment writers live beside their page handlers; this module holds the
//! shared page shell, attribute escaping, and small style helpers. All
//! user-visible strings from the collections pass through `escape` before
//! landing in markup.

use pss_common::fmt::SITE_NAME;

/// Escape text for safe interpolation into HTML content or attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline opacity for a carousel control: dimmed to 0.5 at an end
pub fn control_opacity(enabled: bool) -> &'static str {
    if enabled {
        "1"
    } else {
        "0.5"
    }
}

/// Wrap page content in the shared document shell.
///
/// `title` is the document title (already plain text, escaped here);
/// `body_class` lets the grid page suppress scrolling while the modal
/// overlay is open.
pub fn page(title: &str, body_class: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/site.css">
</head>
<body class="{body_class}">
    <nav class="navbar">
        <a href="/" class="nav-logo">{site_name}</a>
        <button class="hamburger" id="navToggle" aria-label="Toggle navigation">
            <span class="bar"></span>
            <span class="bar"></span>
            <span class="bar"></span>
        </button>
        <ul class="nav-menu" id="navMenu">
            <li><a href="/" class="nav-link">Home</a></li>
            <li><a href="/events" class="nav-link">Events</a></li>
            <li><a href="/speakers" class="nav-link">Speakers</a></li>
        </ul>
    </nav>
    <main>
{content}
    </main>
    <script src="/static/site.js"></script>
</body>
</html>"#,
        title = escape(title),
        site_name = escape(SITE_NAME),
        body_class = body_class,
        content = content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"A & B's"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_control_opacity() {
        assert_eq!(control_opacity(true), "1");
        assert_eq!(control_opacity(false), "0.5");
    }

    #[test]
    fn test_page_shell() {
        let doc = page("Jane Doe - The People's Saturday School", "", "<p>hi</p>");
        assert!(doc.contains("<title>Jane Doe - The People&#39;s Saturday School</title>"));
        assert!(doc.contains("<p>hi</p>"));
        assert!(doc.contains(r#"href="/static/site.css""#));
        assert!(doc.contains("nav-menu"));
    }
}
