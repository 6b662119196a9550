//! Visual identity extraction: logo, favicon, fonts and colors.
//!
//! Work is split in two phases around the stylesheet fetches:
//! - [`collect_visual_sources`] reads everything needed from the parsed
//!   [`Document`] (stylesheet URLs, font-service links, inline styles), so the
//!   document can be dropped before any network call;
//! - [`rank_fonts`] and [`ColorCounter`] then work on plain strings.

mod colors;
mod favicon;
mod fonts;
mod frequency;
mod logo;

use std::sync::LazyLock;

use scraper::Selector;
use serde::Serialize;

pub use colors::{
    extract_color_literals, normalize_hex, rgb_to_hex, ColorCounter, ColorEntry, HTML_WEIGHT,
    INLINE_STYLE_WEIGHT, STYLESHEET_WEIGHT, STYLE_BLOCK_WEIGHT,
};
pub use favicon::resolve_favicon;
pub use fonts::{
    css_font_families, google_font_families, is_denied_font, is_system_font, is_web_safe_font,
    normalize_font_name, rank_fonts, FontEntry, ADOBE_FONTS_NAME,
};
pub use frequency::{Bucket, FrequencyMap};
pub use logo::{detect_logo, score_image, score_images, SignalScore};

use crate::fetch::{is_font_service_url, FetchedStylesheet};
use crate::parse::Document;
use crate::utils::parse_selector_unsafe;

static LINK_HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[href]", "LINK_HREF_SELECTOR"));
static TYPEKIT_SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"script[src*="typekit.net"]"#, "TYPEKIT_SCRIPT_SELECTOR")
});
static STYLE_ATTR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[style]", "STYLE_ATTR_SELECTOR"));
static STYLE_BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("style", "STYLE_BLOCK_SELECTOR"));

/// Inputs for font and color ranking, detached from the DOM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualSources {
    /// Site stylesheets to fetch, resolved, deduplicated, in document order
    pub stylesheet_urls: Vec<String>,
    /// Families requested from Google Fonts, in document order
    pub google_font_families: Vec<String>,
    /// Distinct Adobe Fonts / Typekit kits
    pub adobe_kits: usize,
    /// `style=""` attribute values
    pub inline_styles: Vec<String>,
    /// `<style>` element bodies
    pub style_blocks: Vec<String>,
}

/// Visual section of the audit report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualReport {
    pub logo: Option<SignalScore>,
    pub favicon: Option<String>,
    pub fonts: Vec<FontEntry>,
    pub colors: Vec<ColorEntry>,
}

fn is_google_fonts(url: &str) -> bool {
    url.contains("fonts.googleapis.com")
}

fn is_stylesheet_link(rel: Option<&str>) -> bool {
    rel.is_some_and(|rel| {
        rel.to_lowercase()
            .split_whitespace()
            .any(|token| token == "stylesheet")
    })
}

/// Reads every visual input out of the document.
pub fn collect_visual_sources(document: &Document) -> VisualSources {
    let mut sources = VisualSources::default();
    let mut adobe_kits: Vec<String> = Vec::new();

    for link in document.select(&LINK_HREF_SELECTOR) {
        let Some(url) = link.value().attr("href").and_then(|h| document.resolve(h)) else {
            continue;
        };
        if is_font_service_url(&url) {
            if is_google_fonts(&url) {
                sources
                    .google_font_families
                    .extend(google_font_families(&url));
            } else if !adobe_kits.contains(&url) {
                adobe_kits.push(url);
            }
        } else if is_stylesheet_link(link.value().attr("rel"))
            && !sources.stylesheet_urls.contains(&url)
        {
            sources.stylesheet_urls.push(url);
        }
    }

    for script in document.select(&TYPEKIT_SCRIPT_SELECTOR) {
        if let Some(url) = script.value().attr("src").and_then(|s| document.resolve(s)) {
            if !adobe_kits.contains(&url) {
                adobe_kits.push(url);
            }
        }
    }
    sources.adobe_kits = adobe_kits.len();

    sources.inline_styles = document.attr_values(&STYLE_ATTR_SELECTOR, "style");
    sources.style_blocks = document
        .select(&STYLE_BLOCK_SELECTOR)
        .map(|style| style.text().collect::<String>())
        .filter(|css| !css.trim().is_empty())
        .collect();

    sources
}

/// Ranks fonts from the font-service links and the first `max_stylesheets`
/// fetched stylesheets.
pub fn extract_fonts(
    sources: &VisualSources,
    stylesheets: &[FetchedStylesheet],
    max_stylesheets: usize,
) -> Vec<FontEntry> {
    rank_fonts(
        &sources.google_font_families,
        sources.adobe_kits,
        stylesheets
            .iter()
            .take(max_stylesheets)
            .map(|sheet| sheet.css.as_str()),
    )
}

/// Ranks colors from the whole HTML, fetched stylesheets, inline styles and
/// `<style>` bodies.
pub fn extract_colors(
    html: &str,
    sources: &VisualSources,
    stylesheets: &[FetchedStylesheet],
) -> Vec<ColorEntry> {
    let mut counter = ColorCounter::new();
    counter.add_text(html, HTML_WEIGHT);
    for sheet in stylesheets {
        counter.add_text(&sheet.css, STYLESHEET_WEIGHT);
    }
    for style in &sources.inline_styles {
        counter.add_text(style, INLINE_STYLE_WEIGHT);
    }
    for block in &sources.style_blocks {
        counter.add_text(block, STYLE_BLOCK_WEIGHT);
    }
    counter.ranked()
}
