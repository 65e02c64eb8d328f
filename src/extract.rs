//! Video record extraction.
//!
//! Finds every element carrying the id marker attribute and turns it into a
//! `VideoRecord`, in document order.

use regex::Regex;
use std::sync::LazyLock;

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::record::VideoRecord;

/// Leading integer: optional whitespace and sign, then either `0x` hex digits
/// or ASCII decimal digits. Anything after the digits is ignored.
#[allow(clippy::expect_used)]
static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?)(?:0[xX]([0-9A-Fa-f]+)|([0-9]+))").expect("valid regex")
});

/// Parse the leading integer of an attribute value, the way `parseInt` does
/// without a radix.
///
/// `"12"`, `" 12px"` and `"+12.9"` all give 12; `"0x1A"` gives 26. Parsing
/// stops at the first character that is not an ASCII digit, so `"12٣"` gives
/// 12. Values without leading digits or outside the `i64` range give `None`.
#[must_use]
pub fn parse_order(value: &str) -> Option<i64> {
    let caps = LEADING_INT.captures(value)?;
    let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");

    if let Some(hex) = caps.get(2) {
        let magnitude = i64::from_str_radix(hex.as_str(), 16).ok()?;
        return if negative { magnitude.checked_neg() } else { Some(magnitude) };
    }

    let digits = caps.get(3)?.as_str();
    let parsed: i64 = if negative {
        format!("-{digits}").parse().ok()?
    } else {
        digits.parse().ok()?
    };
    Some(parsed)
}

/// Extract video records from an HTML string, in document order.
///
/// Blank input is rejected before parsing. A page without any marked element
/// yields an empty vector.
pub(crate) fn extract_records(html: &str, options: &Options) -> Result<Vec<VideoRecord>> {
    if html.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let doc = dom::parse(html);
    let marked = dom::select_marked(&doc, &options.id_attribute);

    let mut records = Vec::with_capacity(marked.len());
    let mut skipped = 0usize;
    for element in &marked {
        let Some(id) = element.non_empty(&options.id_attribute) else {
            tracing::trace!(
                tag = dom::tag_name(element.selection()).as_deref().unwrap_or("?"),
                "skipping element with empty id"
            );
            skipped += 1;
            continue;
        };
        records.push(VideoRecord {
            id: id.to_string(),
            subject: element.text_or(&options.subject_attribute, &options.fallback_subject),
            order: element.parsed_or(&options.order_attribute, parse_order, 0),
        });
    }

    tracing::debug!(
        found = records.len(),
        skipped,
        attribute = %options.id_attribute,
        "extracted video records"
    );

    Ok(records)
}
