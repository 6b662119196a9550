//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic HTML elements:
//! - Page title and meta description
//! - Meta keywords, robots and generator
//! - Canonical link, viewport, charset and document language

use std::sync::LazyLock;

use scraper::Selector;

use super::document::{element_text, Document};
use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::{parse_selector_unsafe, parse_selector_with_fallback};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"link[rel="canonical"][href]"#, "CANONICAL_SELECTOR"));
static CHARSET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[charset]", "CHARSET_SELECTOR"));
static CONTENT_TYPE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[http-equiv="Content-Type" i]"#, "CONTENT_TYPE_SELECTOR")
});
static HTML_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("html", "HTML_SELECTOR"));

/// Content of `<meta name="{name}">`, trimmed. `None` when absent.
pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    let selector = parse_selector_with_fallback(
        &format!(r#"meta[name="{}" i][content]"#, name),
        "meta_content",
    );
    document.first_attr(&selector, "content")
}

/// Extracts the page title, or an empty string when missing.
pub fn extract_title(document: &Document, stats: &ProcessingStats) -> String {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default();

    if title.is_empty() {
        log::debug!("No title found in document");
        stats.increment_warning(WarningType::MissingTitle);
    }
    title
}

/// Extracts the meta description, or an empty string when missing.
pub fn extract_meta_description(document: &Document, stats: &ProcessingStats) -> String {
    match meta_content(document, "description") {
        Some(description) => description,
        None => {
            stats.increment_warning(WarningType::MissingMetaDescription);
            String::new()
        }
    }
}

/// Parses the comma-separated `<meta name="keywords">` list.
pub fn extract_meta_keywords(document: &Document) -> Vec<String> {
    meta_content(document, "keywords")
        .map(|content| {
            content
                .split(',')
                .map(|keyword| keyword.trim().to_string())
                .filter(|keyword| !keyword.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Robots directives from `<meta name="robots">`, lowercased.
pub fn extract_robots(document: &Document) -> Vec<String> {
    meta_content(document, "robots")
        .map(|content| {
            content
                .split(',')
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Content of the `generator` meta tag.
pub fn extract_generator(document: &Document) -> Option<String> {
    meta_content(document, "generator").filter(|g| !g.is_empty())
}

pub fn extract_canonical(document: &Document) -> Option<String> {
    document
        .first_attr(&CANONICAL_SELECTOR, "href")
        .and_then(|href| document.resolve(&href))
}

pub fn extract_viewport(document: &Document) -> Option<String> {
    meta_content(document, "viewport")
}

/// Declared character set from `<meta charset>` or the `Content-Type` meta.
pub fn extract_charset(document: &Document) -> Option<String> {
    if let Some(charset) = document.first_attr(&CHARSET_SELECTOR, "charset") {
        return Some(charset.to_uppercase());
    }
    document
        .first_attr(&CONTENT_TYPE_SELECTOR, "content")
        .and_then(|content| {
            content
                .to_lowercase()
                .split("charset=")
                .nth(1)
                .map(|c| c.trim().trim_matches(';').to_uppercase())
        })
        .filter(|c| !c.is_empty())
}

/// The `lang` attribute of the root `<html>` element.
pub fn extract_lang(document: &Document) -> Option<String> {
    document
        .first_attr(&HTML_SELECTOR, "lang")
        .filter(|lang| !lang.is_empty())
}
