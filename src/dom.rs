//! DOM query adapter
//!
//! Wraps the `dom_query` crate behind a small typed API: parse a page, select
//! every element carrying a marker attribute, and read attributes with
//! explicit defaults instead of ad-hoc lookups.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Attribute values come back as StrTendril (reference-counted, cheap to clone)
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Element Operations ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Typed marker query ===

/// An element that carries a marker attribute.
///
/// Attribute access goes through typed accessors; an empty attribute value is
/// treated the same as a missing one.
#[derive(Clone)]
pub struct MarkedElement<'a> {
    sel: Selection<'a>,
}

impl<'a> MarkedElement<'a> {
    /// Underlying selection (a single node).
    #[must_use]
    pub fn selection(&self) -> &Selection<'a> {
        &self.sel
    }

    /// Attribute value, `None` when missing or empty.
    #[must_use]
    pub fn non_empty(&self, name: &str) -> Option<StrTendril> {
        self.sel.attr(name).filter(|value| !value.is_empty())
    }

    /// Attribute value as an owned string, or `default` when missing or empty.
    #[must_use]
    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.non_empty(name)
            .map_or_else(|| default.to_string(), |value| value.to_string())
    }

    /// Attribute value parsed with `parse`, or `default` when missing, empty,
    /// or rejected by `parse`.
    #[must_use]
    pub fn parsed_or<T>(&self, name: &str, parse: impl Fn(&str) -> Option<T>, default: T) -> T {
        self.non_empty(name)
            .and_then(|value| parse(&value))
            .unwrap_or(default)
    }
}

/// Select every element carrying `attribute`, at any depth and of any tag,
/// in document order.
///
/// Elements are matched by attribute lookup rather than an `[attribute]`
/// selector, so names that are not valid CSS identifiers (`data.vid`,
/// `x-on:vid`) work too.
#[must_use]
pub fn select_marked<'a>(doc: &'a Document, attribute: &str) -> Vec<MarkedElement<'a>> {
    doc.select("*")
        .nodes()
        .iter()
        .filter(|node| node.attr(attribute).is_some())
        .map(|node| MarkedElement {
            sel: Selection::from(*node),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_attributes() {
        let doc = parse(r#"<div id="main" data-vid="abc">content</div>"#);
        let div = doc.select("div");

        assert_eq!(div.attr("data-vid").map(|v| v.to_string()), Some("abc".to_string()));
        assert!(div.attr("data-missing").is_none());
    }

    #[test]
    fn test_select_marked_any_tag_any_depth() {
        let doc = parse(
            r#"
            <ul>
                <li data-vid="1">one</li>
                <li><span><a data-vid="2">two</a></span></li>
                <li>none</li>
            </ul>
            <section data-vid="3"></section>
        "#,
        );

        let marked = select_marked(&doc, "data-vid");
        let tags: Vec<_> = marked
            .iter()
            .filter_map(|el| tag_name(el.selection()))
            .collect();

        assert_eq!(tags, vec!["li", "a", "section"]);
    }

    #[test]
    fn test_select_marked_keeps_empty_values() {
        let doc = parse(r#"<p data-vid="">empty</p><p data-vid="x">x</p>"#);
        let marked = select_marked(&doc, "data-vid");

        assert_eq!(marked.len(), 2);
        assert!(marked[0].non_empty("data-vid").is_none());
        assert_eq!(marked[1].non_empty("data-vid").as_deref(), Some("x"));
    }

    #[test]
    fn test_text_or_defaults() {
        let doc = parse(r#"<p data-vid="x" data-nname="">a</p><p data-vid="y">b</p>"#);
        let marked = select_marked(&doc, "data-vid");

        assert_eq!(marked[0].text_or("data-nname", "fallback"), "fallback");
        assert_eq!(marked[1].text_or("data-nname", "fallback"), "fallback");
    }

    #[test]
    fn test_parsed_or_defaults() {
        let doc = parse(r#"<p data-vid="x" data-vit="7"></p><p data-vid="y" data-vit="seven"></p>"#);
        let marked = select_marked(&doc, "data-vid");
        let parse_int = |s: &str| s.parse::<i64>().ok();

        assert_eq!(marked[0].parsed_or("data-vit", parse_int, 0), 7);
        assert_eq!(marked[1].parsed_or("data-vit", parse_int, 0), 0);
    }

    #[test]
    fn test_select_marked_non_css_attribute_names() {
        let doc = parse(r#"<p data.vid="d1"></p><div x-on:vid="c1"></div><span data-vid="n"></span>"#);

        let dotted = select_marked(&doc, "data.vid");
        assert_eq!(dotted.len(), 1);
        assert_eq!(dotted[0].non_empty("data.vid").as_deref(), Some("d1"));

        let colon = select_marked(&doc, "x-on:vid");
        assert_eq!(colon.len(), 1);
        assert_eq!(tag_name(colon[0].selection()), Some("div".to_string()));
    }

    #[test]
    fn test_select_marked_empty_document() {
        let doc = parse("<html><body><p>nothing here</p></body></html>");
        assert!(select_marked(&doc, "data-vid").is_empty());
    }
}
