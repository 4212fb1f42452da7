//! Image selection.
//!
//! Content images come from the main-content subtree only. Each `<img>` is
//! probed for its pixel size and kept when it is large enough to be a real
//! picture rather than an icon or spacer.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::image_probe::ImageProbe;
use crate::url_utils;

/// Collect up to `limit` large-enough images from `main_content`.
///
/// Every `<img>` is visited in document order, but only probed while fewer
/// than `limit` images have been accepted. Blank `src` attributes are
/// skipped, and so are images the probe cannot read.
#[must_use]
pub fn select_images(
    main_content: &Selection,
    base: &str,
    probe: &dyn ImageProbe,
    min_size: u32,
    limit: usize,
) -> Vec<String> {
    let mut accepted = Vec::new();
    let images = dom::query_selector_all(main_content, "img");

    for node in images.nodes() {
        if accepted.len() >= limit {
            continue;
        }

        let Some(src) = dom::get_attribute(&Selection::from(*node), "src") else {
            continue;
        };
        let image_url = url_utils::resolve_against_domain(&src, base);
        if image_url.is_empty() {
            continue;
        }

        match probe.candidate(&image_url) {
            Ok(candidate) if candidate.is_large_enough(min_size) => accepted.push(candidate.url),
            Ok(candidate) => {
                debug!(
                    url = %candidate.url,
                    width = candidate.width,
                    height = candidate.height,
                    "image too small"
                );
            }
            Err(err) => debug!(url = %image_url, error = %err, "image skipped"),
        }
    }

    accepted
}

/// Pick the representative image: the meta image if present, else the first accepted content image.
#[must_use]
pub fn featured_image(meta_image: String, content_images: impl FnOnce() -> Vec<String>) -> String {
    if !meta_image.is_empty() {
        return meta_image;
    }

    content_images().into_iter().next().unwrap_or_default()
}
