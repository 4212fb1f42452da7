//! Result types for extraction output.
//!
//! This module defines the record produced for each extracted page and the
//! transient image candidate evaluated during image selection.

use serde::{Deserialize, Serialize};

/// Preview information extracted from a single web page.
///
/// Produced exactly once per extraction request. String fields are empty
/// when nothing could be found; `title` always falls back to `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Host of the page without scheme and without a leading `www.`.
    pub domain: String,

    /// Absolute, scheme-prefixed URL that was fetched.
    pub url: String,

    /// Absolute favicon URL, or empty.
    pub favicon: String,

    /// Page title.
    pub title: String,

    /// Page description (meta description or paragraph text).
    pub description: String,

    /// Inner HTML of the main-content subtree.
    pub content: String,

    /// Absolute URL of the representative image, or empty.
    pub image: String,
}

/// An image considered for selection, with its declared pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Absolute image URL.
    pub url: String,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl ImageCandidate {
    /// Whether either edge is strictly larger than `min_size`.
    #[must_use]
    pub fn is_large_enough(&self, min_size: u32) -> bool {
        self.width > min_size || self.height > min_size
    }
}
