//! HTML Meta Tag Extraction
//!
//! Reads the structured hints pages publish for link previews: Open Graph
//! and Twitter card `<meta>` tags and `<link rel>` icons. Every lookup is
//! driven by an explicit rule table so the priority between alternatives
//! stays auditable.

use dom_query::{Document, Selection};

use crate::dom;
use crate::url_utils;

/// One `<meta>` alternative: the attribute to test and the value it must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaRule {
    pub attr: &'static str,
    pub value: &'static str,
}

const fn rule(attr: &'static str, value: &'static str) -> MetaRule {
    MetaRule { attr, value }
}

impl MetaRule {
    fn matches(&self, meta: &Selection) -> bool {
        dom::attribute_equals(meta, self.attr, self.value)
    }

    fn selector(&self) -> String {
        format!(r#"meta[{}="{}"]"#, self.attr, self.value)
    }
}

/// Title alternatives. All share one rank: the earliest in the document wins.
pub const TITLE_RULES: &[MetaRule] = &[
    rule("property", "og:title"),
    rule("name", "og:title"),
    rule("name", "twitter:title"),
    rule("property", "twitter:title"),
];

/// Description alternatives, highest priority first.
pub const DESCRIPTION_RULES: &[MetaRule] = &[
    rule("name", "description"),
    rule("property", "og:description"),
    rule("name", "twitter:description"),
];

/// Image alternatives, highest priority first.
pub const IMAGE_RULES: &[MetaRule] = &[
    rule("property", "og:image"),
    rule("name", "og:image"),
    rule("property", "twitter:image"),
    rule("name", "twitter:image"),
    rule("property", "twitter:image:src"),
    rule("name", "twitter:image:src"),
];

/// `rel` values accepted for the favicon. Earliest `<link>` in the document wins.
pub const FAVICON_RELS: &[&str] = &["shortcut icon", "apple-touch-icon", "icon"];

/// `content` of the first `<meta>` in document order matching any title rule.
///
/// Returns an empty string when no tag matches or its `content` is missing.
#[must_use]
pub fn meta_title(doc: &Document) -> String {
    let metas = doc.select("meta");

    metas
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|meta| TITLE_RULES.iter().any(|r| r.matches(meta)))
        .and_then(|meta| dom::get_attribute(&meta, "content"))
        .unwrap_or_default()
}

/// Description from meta tags.
///
/// Every `<meta>` is scanned once. A `name="description"` tag anywhere in
/// the document beats `og:description`, which beats `twitter:description`,
/// regardless of their relative order. Tags with empty `content` are skipped.
#[must_use]
pub fn meta_description(doc: &Document) -> String {
    let mut found: [Option<String>; DESCRIPTION_RULES.len()] = Default::default();

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        for (slot, rule) in found.iter_mut().zip(DESCRIPTION_RULES) {
            if slot.is_some() || !rule.matches(&meta) {
                continue;
            }
            *slot = dom::get_attribute(&meta, "content").filter(|c| !c.is_empty());
        }
    }

    found.into_iter().flatten().next().unwrap_or_default()
}

/// Representative image from meta tags, resolved against `base`.
///
/// Rules are tried in [`IMAGE_RULES`] order; the first rule with a matching
/// tag decides. `base` is the page's `domain(full = true)`.
#[must_use]
pub fn meta_image(doc: &Document, base: &str) -> String {
    let content = IMAGE_RULES.iter().find_map(|rule| {
        let tags = doc.select(&rule.selector());
        if tags.is_empty() {
            None
        } else {
            Some(dom::get_attribute(&tags.first(), "content").unwrap_or_default())
        }
    });

    content
        .map(|img| url_utils::resolve_against_domain(&img, base))
        .unwrap_or_default()
}

/// Favicon `href` of the first matching `<link>` in document order, resolved against `base`.
#[must_use]
pub fn favicon(doc: &Document, base: &str) -> String {
    let links = doc.select("link[rel]");

    links
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|link| {
            FAVICON_RELS
                .iter()
                .any(|rel| dom::attribute_equals(link, "rel", rel))
        })
        .and_then(|link| dom::get_attribute(&link, "href"))
        .map(|href| url_utils::resolve_against_domain(&href, base))
        .unwrap_or_default()
}
