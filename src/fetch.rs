//! Document fetching.
//!
//! [`HttpFetcher`] is the transport seam: it performs a GET and reports the
//! status, content type and body. [`fetch_html`] sits on top of it and
//! validates the response, collapsing every failure into
//! [`Error::FetchFailed`]. No retries are attempted.

use std::io::Read;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use thiserror::Error;
use tracing::{debug, warn};

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;

/// Detailed reasons a fetch did not produce usable HTML.
///
/// These are logged and then reported to callers as [`Error::FetchFailed`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status code: {0}")]
    Status(u16),
    #[error("Invalid content type: {0}")]
    NotHtml(String),
    #[error("Content too large: more than {0} bytes")]
    TooLarge(usize),
}

/// Raw outcome of an HTTP GET.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header value, if any
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Check if this is HTML content
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("text/html"))
    }
}

/// Performs HTTP GET requests.
///
/// Implementations must be shareable across threads; one fetcher serves
/// many concurrent extraction requests.
pub trait HttpFetcher: Send + Sync {
    /// Fetch `url`, returning whatever the server answered.
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, FetchError>;
}

/// Build the blocking HTTP client shared by the page fetcher and image probe.
pub fn build_client(options: &Options) -> Result<Client> {
    Client::builder()
        .timeout(options.timeout)
        .connect_timeout(options.connect_timeout)
        .redirect(Policy::limited(options.max_redirects))
        .user_agent(&options.user_agent)
        .build()
        .map_err(|e| Error::ClientSetup(e.to_string()))
}

/// [`HttpFetcher`] backed by a blocking `reqwest` client.
///
/// The blocking client must not be driven from inside an async runtime.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    max_content_size: usize,
}

impl ReqwestFetcher {
    /// Create a fetcher with its own client.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self::with_client(build_client(options)?, options))
    }

    /// Create a fetcher reusing an existing client.
    #[must_use]
    pub fn with_client(client: Client, options: &Options) -> Self {
        Self {
            client,
            max_content_size: options.max_content_size,
        }
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let limit = u64::try_from(self.max_content_size).unwrap_or(u64::MAX);
        if response.content_length().is_some_and(|len| len > limit) {
            return Err(FetchError::TooLarge(self.max_content_size));
        }

        let body = read_at_most(response, self.max_content_size.saturating_add(1))
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if body.len() > self.max_content_size {
            return Err(FetchError::TooLarge(self.max_content_size));
        }

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Read at most `limit` bytes of `body`.
///
/// Chunked responses carry no length up front, so this is what bounds memory
/// for them.
pub(crate) fn read_at_most(body: impl Read, limit: usize) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    body.take(u64::try_from(limit).unwrap_or(u64::MAX))
        .read_to_end(&mut buf)?;
    Ok(buf)
}

/// Fetch `url` and return its HTML as UTF-8.
///
/// Fails with [`Error::FetchFailed`] when the transport fails, the status is
/// not 200, or the content type does not contain `text/html`.
pub fn fetch_html(fetcher: &dyn HttpFetcher, url: &str) -> Result<String> {
    match fetch_validated(fetcher, url) {
        Ok(response) => {
            debug!(url, bytes = response.body.len(), "fetched page");
            Ok(encoding::transcode_to_utf8(
                &response.body,
                response.content_type.as_deref(),
            ))
        }
        Err(err) => {
            warn!(url, error = %err, "fetch failed");
            Err(Error::FetchFailed {
                url: url.to_string(),
            })
        }
    }
}

fn fetch_validated(
    fetcher: &dyn HttpFetcher,
    url: &str,
) -> std::result::Result<HttpResponse, FetchError> {
    let response = fetcher.get(url)?;

    if response.status != 200 {
        return Err(FetchError::Status(response.status));
    }

    if !response.is_html() {
        return Err(FetchError::NotHtml(
            response.content_type.unwrap_or_default(),
        ));
    }

    Ok(response)
}
