//! Image dimension probing.
//!
//! Content images are only accepted when they are large enough, which means
//! each candidate costs one network round trip. The [`ImageProbe`] trait
//! isolates that lookup so it can be replaced in tests.

use std::io::Cursor;

use image::ImageReader;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fetch::{build_client, read_at_most};
use crate::options::Options;
use crate::result::ImageCandidate;

/// Reads the pixel dimensions of a remote image.
pub trait ImageProbe: Send + Sync {
    /// Return `(width, height)` of the image at `url`.
    ///
    /// Fails with [`Error::ImageUnavailable`] when the image cannot be
    /// fetched or decoded.
    fn dimensions(&self, url: &str) -> Result<(u32, u32)>;

    /// Probe `url` and wrap the result as an [`ImageCandidate`].
    fn candidate(&self, url: &str) -> Result<ImageCandidate> {
        let (width, height) = self.dimensions(url)?;
        Ok(ImageCandidate {
            url: url.to_string(),
            width,
            height,
        })
    }
}

/// Bytes read from the start of an image; enough for common format headers.
pub const IMAGE_HEADER_BYTES: usize = 256 * 1024;

/// [`ImageProbe`] that downloads the start of the image and reads its header.
///
/// Images whose declared `Content-Length` exceeds
/// [`Options::max_content_size`] are rejected without reading the body.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: Client,
    max_content_size: usize,
}

impl HttpImageProbe {
    /// Create a probe with its own client.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self::with_client(build_client(options)?, options))
    }

    /// Create a probe reusing an existing client.
    #[must_use]
    pub fn with_client(client: Client, options: &Options) -> Self {
        Self {
            client,
            max_content_size: options.max_content_size,
        }
    }
}

impl ImageProbe for HttpImageProbe {
    fn dimensions(&self, url: &str) -> Result<(u32, u32)> {
        let unavailable = |reason: String| Error::ImageUnavailable(format!("{url}: {reason}"));

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("status {}", response.status())));
        }

        let limit = u64::try_from(self.max_content_size).unwrap_or(u64::MAX);
        if let Some(len) = response.content_length().filter(|len| *len > limit) {
            return Err(unavailable(format!("{len} bytes exceeds size limit")));
        }

        let head = read_at_most(response, IMAGE_HEADER_BYTES.min(self.max_content_size))
            .map_err(|e| unavailable(e.to_string()))?;
        let dims = image_dimensions(&head).map_err(unavailable)?;

        debug!(url, width = dims.0, height = dims.1, "probed image");
        Ok(dims)
    }
}

/// Read `(width, height)` from encoded image bytes without decoding pixels.
pub fn image_dimensions(bytes: &[u8]) -> std::result::Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}
