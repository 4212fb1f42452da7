//! DOM-based Metadata Extraction
//!
//! Fallbacks used when a page publishes no meta tags: the title from the
//! `<title>` element or a lone `<h1>`, and a description assembled from the
//! document's paragraphs.

use dom_query::{Document, Selection};

use crate::dom;

/// Text of the first `<title>` element, trimmed.
///
/// Returns `None` if the element is missing or blank.
#[must_use]
pub fn examine_title_element(doc: &Document) -> Option<String> {
    let title_elem = doc.select("title");
    if title_elem.is_empty() {
        return None;
    }

    let title = dom::text_content(&title_elem.first()).trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Text of the `<h1>` element when the document has exactly one.
#[must_use]
pub fn single_heading(doc: &Document) -> Option<String> {
    let headings = doc.select("h1");
    if headings.length() != 1 {
        return None;
    }

    let heading = dom::text_content(&headings).trim().to_string();
    if heading.is_empty() {
        None
    } else {
        Some(heading)
    }
}

/// Concatenated text of every `<p>` in the document.
///
/// Each paragraph is trimmed and appended in document order with no
/// separator between paragraphs.
#[must_use]
pub fn paragraph_text(doc: &Document) -> String {
    let paragraphs = doc.select("p");

    paragraphs
        .nodes()
        .iter()
        .map(|node| dom::text_content(&Selection::from(*node)))
        .fold(String::new(), |mut acc, text| {
            acc.push_str(text.trim());
            acc
        })
}

/// Keep at most `limit` whitespace-separated words of `text`.
///
/// Text already within the limit is returned unchanged; otherwise the kept
/// words are joined with single spaces.
#[must_use]
pub fn truncate_words(text: &str, limit: usize) -> String {
    if dom::word_count(text) <= limit {
        return text.to_string();
    }

    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
