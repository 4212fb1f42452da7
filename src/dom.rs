//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate giving the extractors the handful
//! of node operations they rely on: selector queries in document order,
//! attribute lookup, text and HTML serialization, and parent traversal.

pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Query all elements matching a CSS selector, in document order.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Get an attribute value as an owned string.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check whether the first node carries `name` with exactly `value`.
#[must_use]
pub fn attribute_equals(sel: &Selection, name: &str, value: &str) -> bool {
    sel.attr(name).is_some_and(|v| &*v == value)
}

/// Get tag name (lowercase) of the first node.
#[must_use]
pub fn tag_name_of(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Immediate parent of a node, if it has one.
#[inline]
#[must_use]
pub fn parent_node<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent()
}

/// The document's root `<html>` element.
#[inline]
#[must_use]
pub fn document_element(doc: &Document) -> Selection<'_> {
    doc.select("html").first()
}

/// Number of whitespace-separated tokens in `text`.
#[inline]
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
