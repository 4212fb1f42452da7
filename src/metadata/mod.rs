//! Metadata extraction module.
//!
//! Structured hints from `<meta>`/`<link>` tags live in [`meta_tags`];
//! fallbacks derived from ordinary document elements live in
//! [`dom_extraction`].

pub mod dom_extraction;
pub mod meta_tags;

pub use dom_extraction::{examine_title_element, paragraph_text, single_heading, truncate_words};
pub use meta_tags::{favicon, meta_description, meta_image, meta_title};
