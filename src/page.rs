//! A single fetched page.
//!
//! [`Page`] bundles everything one extraction request needs: the normalized
//! URL, the parsed document and borrowed collaborators. It is created per
//! request and never shared, so extraction itself keeps no state between
//! requests.

use dom_query::{Document, Selection};

use crate::content;
use crate::error::Result;
use crate::image_probe::ImageProbe;
use crate::images;
use crate::metadata::{dom_extraction, meta_tags};
use crate::options::Options;
use crate::result::PageInfo;
use crate::url_utils;

/// A parsed page plus the context needed to extract from it.
pub struct Page<'p> {
    url: String,
    domain: String,
    base_url: String,
    document: Document,
    probe: &'p dyn ImageProbe,
    options: &'p Options,
}

impl<'p> Page<'p> {
    /// Parse `html` as the page found at `raw_url`.
    ///
    /// `raw_url` is normalized first. Fails with
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) if it has no host.
    pub fn from_html(
        raw_url: &str,
        html: &str,
        probe: &'p dyn ImageProbe,
        options: &'p Options,
    ) -> Result<Self> {
        let url = url_utils::normalize(raw_url);
        Self::parse(url, html, probe, options)
    }

    /// Parse `html` as the page at the already-normalized `url`.
    pub(crate) fn parse(
        url: String,
        html: &str,
        probe: &'p dyn ImageProbe,
        options: &'p Options,
    ) -> Result<Self> {
        let domain = url_utils::domain(&url, false)?;
        let base_url = url_utils::domain(&url, true)?;

        Ok(Self {
            url,
            domain,
            base_url,
            document: Document::from(html),
            probe,
            options,
        })
    }

    /// The normalized, absolute page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display domain, without scheme or leading `www.`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// `http://` + domain; relative image and icon references resolve against it.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The parsed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Title from Open Graph or Twitter card tags, or empty.
    #[must_use]
    pub fn meta_title(&self) -> String {
        meta_tags::meta_title(&self.document)
    }

    /// Description from `<meta>` tags, or empty.
    #[must_use]
    pub fn meta_description(&self) -> String {
        meta_tags::meta_description(&self.document)
    }

    /// Absolute URL of the Open Graph or Twitter card image, or empty.
    #[must_use]
    pub fn meta_image(&self) -> String {
        meta_tags::meta_image(&self.document, &self.base_url)
    }

    /// Absolute favicon URL, or empty.
    #[must_use]
    pub fn favicon(&self) -> String {
        meta_tags::favicon(&self.document, &self.base_url)
    }

    /// Page title.
    ///
    /// Meta title, else `<title>`, else the only `<h1>`, else the page URL.
    #[must_use]
    pub fn title(&self) -> String {
        let title = self.meta_title();
        if !title.is_empty() {
            return title;
        }

        dom_extraction::examine_title_element(&self.document)
            .or_else(|| dom_extraction::single_heading(&self.document))
            .unwrap_or_else(|| self.url.clone())
    }

    /// Page description, optionally cut to `word_limit` words.
    ///
    /// Meta description, else the text of every paragraph in the document.
    #[must_use]
    pub fn description(&self, word_limit: Option<usize>) -> String {
        let mut description = self.meta_description();
        if description.is_empty() {
            description = dom_extraction::paragraph_text(&self.document);
        }

        match word_limit {
            Some(limit) => dom_extraction::truncate_words(&description, limit),
            None => description,
        }
    }

    /// The main-content node.
    #[must_use]
    pub fn main_content(&self) -> Selection<'_> {
        content::locate_main_content(&self.document)
    }

    /// Inner HTML of the main-content node.
    #[must_use]
    pub fn content(&self) -> String {
        content::content_html(&self.document)
    }

    /// Up to `limit` absolute URLs of large-enough images inside the main content.
    #[must_use]
    pub fn images(&self, limit: usize) -> Vec<String> {
        images::select_images(
            &self.main_content(),
            &self.base_url,
            self.probe,
            self.options.min_image_size,
            limit,
        )
    }

    /// Meta image, else the first accepted content image, else empty.
    #[must_use]
    pub fn featured_image(&self) -> String {
        images::featured_image(self.meta_image(), || self.images(1))
    }

    /// Assemble the complete [`PageInfo`] record.
    #[must_use]
    pub fn info(&self) -> PageInfo {
        PageInfo {
            domain: self.domain.clone(),
            url: self.url.clone(),
            favicon: self.favicon(),
            title: self.title(),
            description: self.description(self.options.description_word_limit),
            content: self.content(),
            image: self.featured_image(),
        }
    }
}
