//! HTML parsing and data extraction.
//!
//! This module wraps fetched HTML in a [`Document`] and extracts:
//! - Meta tags (title, description, keywords, robots, generator, viewport, charset)
//! - Structured data (JSON-LD, Open Graph, Twitter Cards, microdata)
//! - Social media links
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod document;
mod html;
mod social;
mod structured;

// Re-export public API
pub use document::{element_text, Document};
pub use html::{
    extract_canonical, extract_charset, extract_generator, extract_lang,
    extract_meta_description, extract_meta_keywords, extract_robots, extract_title,
    extract_viewport, meta_content,
};
pub use social::{extract_social_media_links, SocialMediaLink};
pub use structured::{extract_structured_data, JsonLdSummary, StructuredData};
