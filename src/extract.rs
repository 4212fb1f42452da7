//! Page info assembly.
//!
//! [`Grabber`] owns the HTTP collaborators and turns a raw URL into a
//! [`PageInfo`] in one pass: normalize, fetch, parse, extract. It carries
//! no per-request state and can serve concurrent requests from many
//! threads.

use tracing::info;

use crate::error::Result;
use crate::fetch::{self, HttpFetcher, ReqwestFetcher};
use crate::image_probe::{HttpImageProbe, ImageProbe};
use crate::options::Options;
use crate::page::Page;
use crate::result::PageInfo;
use crate::url_utils;

/// Extracts [`PageInfo`] records from URLs.
///
/// # Example
///
/// ```rust,no_run
/// use pagegrab::{Grabber, Options};
///
/// let grabber = Grabber::new(Options::default())?;
/// let info = grabber.extract("example.com")?;
/// println!("{} - {}", info.title, info.domain);
/// # Ok::<(), pagegrab::Error>(())
/// ```
pub struct Grabber {
    fetcher: Box<dyn HttpFetcher>,
    probe: Box<dyn ImageProbe>,
    options: Options,
}

impl Grabber {
    /// Create a grabber using `reqwest` for pages and images.
    ///
    /// Both collaborators share one connection pool.
    pub fn new(options: Options) -> Result<Self> {
        let client = fetch::build_client(&options)?;
        let fetcher = ReqwestFetcher::with_client(client.clone(), &options);
        let probe = HttpImageProbe::with_client(client, &options);

        Ok(Self::with_collaborators(fetcher, probe, options))
    }

    /// Create a grabber with caller-supplied collaborators.
    #[must_use]
    pub fn with_collaborators(
        fetcher: impl HttpFetcher + 'static,
        probe: impl ImageProbe + 'static,
        options: Options,
    ) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            probe: Box::new(probe),
            options,
        }
    }

    /// The options this grabber was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetch `raw_url` and return the parsed [`Page`] for individual lookups.
    pub fn page(&self, raw_url: &str) -> Result<Page<'_>> {
        let url = url_utils::normalize(raw_url);
        // Reject hostless input before touching the network.
        url_utils::host_of(&url)?;

        let html = fetch::fetch_html(self.fetcher.as_ref(), &url)?;
        Page::parse(url, &html, self.probe.as_ref(), &self.options)
    }

    /// Fetch `raw_url` and extract its [`PageInfo`].
    pub fn extract(&self, raw_url: &str) -> Result<PageInfo> {
        let page = self.page(raw_url)?;
        let info = page.info();
        log_extracted(&info);
        Ok(info)
    }

    /// Extract [`PageInfo`] from HTML that was already fetched from `raw_url`.
    ///
    /// Content images are still probed through the configured [`ImageProbe`].
    pub fn extract_html(&self, raw_url: &str, html: &str) -> Result<PageInfo> {
        let page = Page::from_html(raw_url, html, self.probe.as_ref(), &self.options)?;
        let info = page.info();
        log_extracted(&info);
        Ok(info)
    }
}

fn log_extracted(info: &PageInfo) {
    info!(
        url = %info.url,
        title = %info.title,
        content_bytes = info.content.len(),
        has_image = !info.image.is_empty(),
        "extracted page info"
    );
}
