//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` providing the handful of read-only tree
//! operations the extractors need: parse, first/all descendant lookup,
//! trimmed text and attribute access.
//!
//! Every lookup returns `Option` or an empty collection instead of an empty
//! `Selection`, so callers are forced to handle absence explicitly.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

// === Parsing ===

/// Parse HTML string into a document.
///
/// Parsing is lenient (html5ever tree construction): unbalanced, unknown or
/// truncated markup is recovered, never rejected.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection covering the whole document.
///
/// The parser always synthesizes an `<html>` element, so this is never empty.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

// === Querying ===

/// First descendant of `sel` matching `matcher`, in document order.
#[must_use]
pub fn find_first<'a>(sel: &Selection<'a>, matcher: &Matcher) -> Option<Selection<'a>> {
    let found = sel.select_matcher(matcher);
    if found.exists() {
        Some(found.first())
    } else {
        None
    }
}

/// All descendants of `sel` matching `matcher`, in document order.
///
/// Each element is returned as its own single-node selection.
#[must_use]
pub fn find_all<'a>(sel: &Selection<'a>, matcher: &Matcher) -> Vec<Selection<'a>> {
    sel.select_matcher(matcher)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Content ===

/// Text content of the node and its descendants, trimmed at both ends.
#[must_use]
pub fn text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Value of attribute `name`, if present.
#[inline]
#[must_use]
pub fn attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Guarded lookups ===

/// Trimmed text of the first descendant matching `matcher`, or `""` when
/// there is none.
#[must_use]
pub fn text_of(sel: &Selection, matcher: &Matcher) -> String {
    find_first(sel, matcher).map(|found| text(&found)).unwrap_or_default()
}

/// Attribute `name` of `sel`, or `""` when absent.
#[must_use]
pub fn attr_or_empty(sel: &Selection, name: &str) -> String {
    attribute(sel, name).unwrap_or_default()
}
