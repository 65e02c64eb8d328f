//! On-screen renderings of the ordered list.

use crate::options::Options;
use crate::record::VideoRecord;
use crate::watch::watch_url;

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Render the list as an HTML ordered list.
///
/// Each entry is the label `"{order}. {subject}: "` followed by a link to the
/// watch URL that opens in a new browsing context.
#[must_use]
pub fn render_html(records: &[VideoRecord], options: &Options) -> String {
    let mut html = String::from("<ol id=\"videoLinksList\">\n");
    for record in records {
        let url = escape_html(&watch_url(&options.watch_url_base, &record.id));
        html.push_str(&format!(
            "  <li><span>{}. {}: </span><a href=\"{url}\" target=\"_blank\">{url}</a></li>\n",
            record.order,
            escape_html(&record.subject),
        ));
    }
    html.push_str("</ol>\n");
    html
}

/// Render the list for a terminal: the labeled lines, one per entry.
#[must_use]
pub fn render_text(records: &[VideoRecord], options: &Options) -> String {
    records
        .iter()
        .map(|record| super::labeled_line(record, options) + "\n")
        .collect()
}
