//! Configuration options for page extraction.
//!
//! The `Options` struct controls the HTTP collaborators (timeouts, redirect
//! and size limits) and the few tunable extraction thresholds.

use std::time::Duration;

/// Default minimum image edge, in pixels, for content images.
pub const DEFAULT_MIN_IMAGE_SIZE: u32 = 200;

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pagegrab::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     timeout: Duration::from_secs(5),
///     description_word_limit: Some(40),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// `User-Agent` header sent with page and image requests.
    ///
    /// Default: `pagegrab/<crate version>`
    pub user_agent: String,

    /// Total timeout for a single HTTP request.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Connection establishment timeout.
    ///
    /// Default: 10 seconds
    pub connect_timeout: Duration,

    /// Maximum number of redirects followed per request.
    ///
    /// Default: `10`
    pub max_redirects: usize,

    /// Maximum accepted page body size in bytes.
    ///
    /// Larger responses are treated as a failed fetch.
    ///
    /// Default: 10 MiB
    pub max_content_size: usize,

    /// Minimum image size in pixels.
    ///
    /// A content image is accepted when its width OR its height is strictly
    /// greater than this value. Filters out icons, spacers and avatars.
    ///
    /// Default: `200`
    pub min_image_size: u32,

    /// Truncate the assembled description to this many words.
    ///
    /// Default: `None` (no truncation)
    pub description_word_limit: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: concat!("pagegrab/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_redirects: 10,
            max_content_size: 10 * 1024 * 1024,
            min_image_size: DEFAULT_MIN_IMAGE_SIZE,
            description_word_limit: None,
        }
    }
}
