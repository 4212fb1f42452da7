//! # pagegrab
//!
//! Link-preview extraction for arbitrary web pages.
//!
//! Given only a URL, pagegrab fetches the page and produces a [`PageInfo`]
//! record: display domain, title, description, main body HTML,
//! representative image and favicon. Open Graph and Twitter card tags are
//! used when present; otherwise the values are derived from the document
//! itself.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let info = pagegrab::extract("example.com")?;
//! println!("Title: {}", info.title);
//! println!("Image: {}", info.image);
//! # Ok::<(), pagegrab::Error>(())
//! ```
//!
//! ## Main content
//!
//! Pages without article markup are handled by a text-density heuristic:
//! every `<p>`, `<tr>` and `<pre>` votes for its parent with that parent's
//! word count, and the parent with the most words becomes the content. See
//! [`content`] for the exact rules.
//!
//! ## Collaborators
//!
//! Network access goes through two traits, [`HttpFetcher`] for pages and
//! [`ImageProbe`] for image dimensions. [`Grabber::new`] wires blocking
//! `reqwest` implementations; [`Grabber::with_collaborators`] accepts any
//! other implementation.

mod error;
mod extract;
mod options;
mod page;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Main-content location heuristic.
pub mod content;

/// Content image selection.
pub mod images;

/// Metadata extraction (Open Graph / Twitter meta tags, DOM fallbacks).
pub mod metadata;

/// URL normalization, domain derivation and reference resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page fetching and response validation.
pub mod fetch;

/// Image dimension probing.
pub mod image_probe;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Grabber;
pub use fetch::{FetchError, HttpFetcher, HttpResponse, ReqwestFetcher};
pub use image_probe::{HttpImageProbe, ImageProbe};
pub use options::Options;
pub use page::Page;
pub use result::{ImageCandidate, PageInfo};

/// Fetches `url` and extracts its [`PageInfo`] using default options.
///
/// # Example
///
/// ```rust,no_run
/// let info = pagegrab::extract("https://www.example.com/article")?;
/// assert_eq!(info.domain, "example.com");
/// # Ok::<(), pagegrab::Error>(())
/// ```
pub fn extract(url: &str) -> Result<PageInfo> {
    extract_with_options(url, &Options::default())
}

/// Fetches `url` and extracts its [`PageInfo`] with custom options.
///
/// Builds a fresh HTTP client per call; hold a [`Grabber`] to reuse one
/// across requests.
pub fn extract_with_options(url: &str, options: &Options) -> Result<PageInfo> {
    Grabber::new(options.clone())?.extract(url)
}
