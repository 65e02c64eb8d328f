//! Bookmarklet install helper.
//!
//! The bookmarklet captures the current page's markup into `window.name` and
//! navigates to the extractor page, which picks it up as its handoff.

/// Page the bookmarklet navigates to after capturing.
pub const DEFAULT_APP_URL: &str = "https://thefoxbroo.github.io/video-links-extractor/";

/// The snippet to save as a bookmark.
///
/// `app_url` is embedded in a single-quoted JavaScript string; quotes and
/// backslashes in it are escaped.
#[must_use]
pub fn bookmarklet_snippet(app_url: &str) -> String {
    let escaped = app_url.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "javascript:(function(){{ window.name = document.documentElement.outerHTML; window.location = '{escaped}'; }})();"
    )
}
