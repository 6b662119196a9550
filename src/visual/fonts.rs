//! Font family ranking.
//!
//! Evidence comes from Google Fonts links (+10 per family), Adobe Fonts kit
//! links (+8 per kit) and `font-family` declarations in fetched stylesheets
//! (+5 per occurrence). Names pass through the denylists below before they
//! reach the [`FrequencyMap`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use super::frequency::FrequencyMap;
use crate::config::MAX_RANKED_FONTS;
use crate::utils::compile_regex_unsafe;

const GOOGLE_FONTS_WEIGHT: u32 = 10;
const ADOBE_KIT_WEIGHT: u32 = 8;
const STYLESHEET_WEIGHT: u32 = 5;
/// Ranking multiplier for families that are neither generic nor web-safe.
const CUSTOM_FONT_MULTIPLIER: u32 = 3;

const NAME_LENGTH: (usize, usize) = (3, 50);

/// Display name of the bucket for Adobe Fonts kits, whose families are not
/// visible in the markup.
pub const ADOBE_FONTS_NAME: &str = "Adobe Fonts";

/// Generic families, keywords and platform UI aliases. Never reported.
const SYSTEM_FONTS: &[&str] = &[
    "serif", "sans-serif", "monospace", "cursive", "fantasy", "system-ui", "ui-serif",
    "ui-sans-serif", "ui-monospace", "ui-rounded", "emoji", "math", "fangsong", "-apple-system",
    "apple-system", "blinkmacsystemfont", "inherit", "initial", "unset", "revert", "none",
    "apple color emoji", "segoe ui emoji", "segoe ui symbol", "noto color emoji",
];

/// Fonts installed nearly everywhere. Reported, but without the ranking multiplier.
const WEB_SAFE_FONTS: &[&str] = &[
    "arial", "helvetica", "helvetica neue", "times", "times new roman", "georgia", "verdana",
    "tahoma", "trebuchet ms", "courier", "courier new", "segoe ui", "lucida grande",
    "lucida sans unicode", "palatino", "garamond", "impact", "comic sans ms",
];

/// Icon fonts.
const ICON_FONTS: &[&str] = &[
    "fontawesome", "font awesome", "font awesome 5 free", "font awesome 5 brands",
    "font awesome 6 free", "font awesome 6 brands", "material icons", "material symbols",
    "material symbols outlined", "glyphicons halflings", "icomoon", "dashicons",
    "bootstrap-icons", "feather", "ionicons", "themify", "eleganticons", "eicons",
    "simple-line-icons", "linearicons", "et-line", "fontello", "genericons", "wpzoom",
];

/// Identifiers that show up as `font-family` values through CSS class leakage,
/// build tooling and variable names.
const PSEUDO_FONTS: &[&str] = &[
    "userregistration", "button", "buttons", "handler", "modal", "dropdown", "tooltip",
    "wrapper", "container", "header", "footer", "navbar", "widget", "slider", "carousel",
    "popup", "form", "input", "label", "menu", "sidebar", "content", "layout", "default",
    "regular", "normal", "bold", "italic", "auto", "checkout", "cart", "swiper", "elementor",
    "admin", "editor", "block", "blocks", "theme", "plugin", "global", "primary", "secondary",
    "heading", "headings", "body", "text", "title", "caption", "icon", "icons", "inline",
    "important", "var", "null", "undefined", "true", "false", "star", "stars", "woocommerce",
    "revicons", "slick", "lightbox", "social", "payment", "arrow", "arrows", "close", "search",
    "placeholder", "select", "checkbox", "radio", "toggle", "spinner", "loader", "overlay",
    "notice", "alert", "badge", "custom", "main", "base", "font", "fonts", "family",
];

/// Weight and style suffixes stripped before bucketing.
const STYLE_SUFFIXES: &[&str] = &[
    "thin", "hairline", "extralight", "ultralight", "light", "book", "regular", "normal",
    "medium", "semibold", "demibold", "bold", "extrabold", "ultrabold", "black", "heavy",
    "italic", "oblique", "bolditalic", "lightitalic", "mediumitalic", "semibolditalic",
    "blackitalic", "thinitalic", "extrabolditalic", "extralightitalic", "variable", "vf",
    "webfont", "web",
];

static FONT_FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)font-family\s*:\s*([^;{}]+)", "FONT_FAMILY_RE"));
static CAMEL_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"[a-z][A-Z]", "CAMEL_CASE_RE"));

/// One ranked font family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontEntry {
    pub name: String,
    /// Accumulated evidence weight, before the ranking multiplier
    pub weight: u32,
}

fn is_style_suffix(token: &str) -> bool {
    let lower = token.to_lowercase();
    STYLE_SUFFIXES.contains(&lower.as_str())
        || (!lower.is_empty() && lower.chars().all(|c| c.is_ascii_digit()))
}

/// Strips quotes, a trailing `!important` and redundant whitespace.
fn clean_family_name(raw: &str) -> String {
    raw.trim()
        .trim_end_matches("!important")
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn bucket(display: String) -> Option<(String, String)> {
    if display.is_empty() {
        None
    } else {
        Some((display.to_lowercase(), display))
    }
}

/// Normalizes a raw family name into `(bucket key, display name)`.
///
/// Quotes are removed and weight/style suffixes joined by `-` or `_` (such as
/// `-Bold` or `_Light`) are stripped, so `Roboto-Bold` and `Roboto-Light` both
/// land in `roboto`. Space-separated words are part of the family name:
/// `Archivo Black` stays `Archivo Black`. The key is the lowercased display
/// name. Returns `None` for an empty result.
pub fn normalize_font_name(raw: &str) -> Option<(String, String)> {
    let mut name = clean_family_name(raw);

    while let Some(pos) = name.rfind(['-', '_']) {
        if pos == 0 || !is_style_suffix(&name[pos + 1..]) {
            break;
        }
        name.truncate(pos);
        name = name.trim_end().to_string();
    }

    bucket(name)
}

pub fn is_system_font(key: &str) -> bool {
    SYSTEM_FONTS.contains(&key)
}

pub fn is_web_safe_font(key: &str) -> bool {
    WEB_SAFE_FONTS.contains(&key)
}

fn is_icon_font(key: &str) -> bool {
    ICON_FONTS.contains(&key) || key.contains("icon") || key.contains("awesome")
}

/// Whether a normalized name is rejected by the denylists.
///
/// `display` is the case-preserving name, used for the camelCase heuristic.
pub fn is_denied_font(key: &str, display: &str) -> bool {
    let length = display.chars().count();
    is_system_font(key)
        || is_icon_font(key)
        || PSEUDO_FONTS.contains(&key)
        || !(NAME_LENGTH.0..=NAME_LENGTH.1).contains(&length)
        || (!display.contains(' ') && CAMEL_CASE_RE.is_match(display))
        || key.starts_with("var(")
        || key.starts_with('$')
        || key.starts_with("--")
}

fn add_font(fonts: &mut FrequencyMap, candidate: Option<(String, String)>, raw: &str, weight: u32) {
    if let Some((key, display)) = candidate {
        if is_denied_font(&key, &display) {
            log::trace!("Ignoring font-family candidate '{}'", raw);
        } else {
            fonts.add(&key, &display, weight);
        }
    }
}

/// Family names from a Google Fonts stylesheet URL.
///
/// Handles the CSS2 API (`family=Roboto:wght@400;700&family=Open+Sans`) and the
/// legacy API (`family=Roboto|Open+Sans:400,700`).
pub fn google_font_families(href: &str) -> Vec<String> {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => return Vec::new(),
    };
    url.query_pairs()
        .filter(|(key, _)| key == "family")
        .flat_map(|(_, value)| {
            value
                .split('|')
                .filter_map(|family| family.split(':').next())
                .map(|family| family.trim().to_string())
                .filter(|family| !family.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Raw family names from every `font-family` declaration in `css`.
pub fn css_font_families(css: &str) -> Vec<String> {
    FONT_FAMILY_RE
        .captures_iter(css)
        .flat_map(|cap| {
            cap[1]
                .split(',')
                .map(|family| family.trim().to_string())
                .filter(|family| !family.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Accumulates and ranks font evidence.
///
/// Buckets are ranked by weight, tripled for fonts that are not web-safe; the
/// reported weight is the unmultiplied one.
pub fn rank_fonts<'a, I>(google_families: &[String], adobe_kits: usize, stylesheets: I) -> Vec<FontEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fonts = FrequencyMap::new();

    // Google Fonts names are exact family names, never suffixed
    for family in google_families {
        add_font(&mut fonts, bucket(clean_family_name(family)), family, GOOGLE_FONTS_WEIGHT);
    }
    for _ in 0..adobe_kits {
        fonts.add(
            &ADOBE_FONTS_NAME.to_lowercase(),
            ADOBE_FONTS_NAME,
            ADOBE_KIT_WEIGHT,
        );
    }
    for css in stylesheets {
        for family in css_font_families(css) {
            add_font(&mut fonts, normalize_font_name(&family), &family, STYLESHEET_WEIGHT);
        }
    }

    fonts
        .top_by(MAX_RANKED_FONTS, |bucket| {
            if is_web_safe_font(&bucket.key) {
                bucket.weight
            } else {
                bucket.weight * CUSTOM_FONT_MULTIPLIER
            }
        })
        .into_iter()
        .filter(|bucket| !is_denied_font(&bucket.key, &bucket.display))
        .map(|bucket| FontEntry {
            name: bucket.display,
            weight: bucket.weight,
        })
        .collect()
}
