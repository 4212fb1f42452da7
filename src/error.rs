//! Error types for pagegrab.
//!
//! This module defines the error types returned by extraction operations.
//! Fetch problems of every kind (transport, status, content type) are
//! reported through the single [`Error::FetchFailed`] variant.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL string cannot be used (no parseable host).
    #[error("Invalid input URL: {0}")]
    InvalidInput(String),

    /// The page could not be retrieved as HTML.
    #[error("could not retrieve usable HTML for {url}")]
    FetchFailed {
        /// The normalized URL that was requested.
        url: String,
    },

    /// An image's dimensions could not be read.
    ///
    /// Only produced by [`crate::ImageProbe`] implementations. Extraction
    /// recovers from it by skipping the image.
    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
