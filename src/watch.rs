//! Watch URL construction.

use crate::record::VideoRecord;

/// Build the watch URL for a video id.
///
/// The id is appended to `base` verbatim: no escaping and no format checks,
/// so the same id always yields the same URL.
///
/// # Example
///
/// ```rust
/// use video_links_extractor::watch::watch_url;
///
/// let url = watch_url("https://www.youtube.com/watch?v=", "b2");
/// assert_eq!(url, "https://www.youtube.com/watch?v=b2");
/// ```
#[must_use]
pub fn watch_url(base: &str, id: &str) -> String {
    let mut url = String::with_capacity(base.len() + id.len());
    url.push_str(base);
    url.push_str(id);
    url
}

/// Watch URLs for every record, in list order.
#[must_use]
pub fn watch_urls(base: &str, records: &[VideoRecord]) -> Vec<String> {
    records.iter().map(|r| watch_url(base, &r.id)).collect()
}
