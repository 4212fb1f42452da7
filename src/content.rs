//! Main-content location.
//!
//! Finds the subtree most likely to hold a page's readable body using text
//! density alone. Every `<p>`, `<tr>` and `<pre>` votes for its parent with
//! the parent's word count; the parent with the largest count wins.
//!
//! Votes are keyed by word count, so two parents with identical counts
//! collide and the one visited later replaces the earlier one. Callers rely
//! on that exact selection; keep it.
//!
//! Parent text is recomputed for every qualifying element instead of being
//! cached per parent. Ordinary pages are small enough that this does not matter.

use std::collections::BTreeMap;

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;

use crate::dom;

/// Elements whose parents are candidates for the main content.
pub const CANDIDATE_SELECTOR: &str = "p, tr, pre";

/// Word count → candidate container, last writer wins on equal counts.
#[derive(Default)]
pub struct CandidateScores<'a> {
    by_words: BTreeMap<usize, NodeRef<'a>>,
}

impl<'a> CandidateScores<'a> {
    /// Create an empty score table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` as responsible for `words`, replacing any earlier node with that count.
    pub fn record(&mut self, words: usize, node: NodeRef<'a>) {
        self.by_words.insert(words, node);
    }

    /// Number of distinct word counts recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_words.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_words.is_empty()
    }

    /// The candidate with the largest word count.
    #[must_use]
    pub fn best(&self) -> Option<(usize, NodeRef<'a>)> {
        self.by_words
            .iter()
            .next_back()
            .map(|(words, node)| (*words, *node))
    }
}

/// Score every candidate container in `doc`, in document order.
#[must_use]
pub fn score_candidates(doc: &Document) -> CandidateScores<'_> {
    let mut scores = CandidateScores::new();
    let elements = doc.select(CANDIDATE_SELECTOR);

    for node in elements.nodes() {
        let Some(parent) = dom::parent_node(node) else {
            continue;
        };
        let words = dom::word_count(&dom::text_content(&Selection::from(parent)));
        scores.record(words, parent);
    }

    scores
}

/// Locate the main-content node of `doc`.
///
/// Falls back to the whole document (its `<html>` element) when there is
/// no `<p>`, `<tr>` or `<pre>` at all.
#[must_use]
pub fn locate_main_content(doc: &Document) -> Selection<'_> {
    let scores = score_candidates(doc);

    match scores.best() {
        Some((words, node)) => {
            debug!(candidates = scores.len(), words, "selected main content node");
            Selection::from(node)
        }
        None => {
            debug!("no candidate elements, using whole document");
            dom::document_element(doc)
        }
    }
}

/// Serialized inner HTML of the main-content node.
#[must_use]
pub fn content_html(doc: &Document) -> String {
    dom::inner_html(&locate_main_content(doc)).to_string()
}
