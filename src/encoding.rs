//! Character decoding for saved pages.
//!
//! Pages saved from a browser keep their original charset. Before extraction
//! the bytes are decoded to UTF-8 using, in order: a byte order mark, a
//! `<meta charset>` or `http-equiv="Content-Type"` declaration, and finally
//! UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LIMIT: usize = 2048;

/// Matches `charset=...` inside any `<meta>` tag, which covers both the
/// `<meta charset>` and the `http-equiv` content-type forms.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([A-Za-z0-9._:-]+)"#).expect("valid regex")
});

/// Detect the character encoding of a saved page.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing; a byte order mark is
/// stripped.
///
/// # Examples
///
/// ```
/// use video_links_extractor::encoding::decode_page;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p data-vid=\"x\" data-nname=\"Caf\xE9\"></p>";
/// assert!(decode_page(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_page(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced invalid byte sequences while decoding page");
    }
    decoded.into_owned()
}
