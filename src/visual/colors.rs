//! Color frequency ranking.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::frequency::FrequencyMap;
use crate::config::MAX_RANKED_COLORS;
use crate::utils::compile_regex_unsafe;

/// Source weights.
pub const HTML_WEIGHT: u32 = 1;
pub const STYLESHEET_WEIGHT: u32 = 5;
pub const INLINE_STYLE_WEIGHT: u32 = 4;
pub const STYLE_BLOCK_WEIGHT: u32 = 3;

// A `#` preceded by `&` is an HTML entity (`&#123;`), not a color.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?:^|[^&\w])#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b",
        "HEX_RE",
    )
});
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)rgba?\(\s*(\d{1,3})[\s,]+(\d{1,3})[\s,]+(\d{1,3})",
        "RGB_RE",
    )
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    /// `#RRGGBB`, uppercase
    pub hex: String,
    pub weight: u32,
}

/// Normalizes a hex color to uppercase 6-digit `#RRGGBB`.
///
/// Accepts 3 or 6 digits with or without `#`; anything else is `None`.
pub fn normalize_hex(input: &str) -> Option<String> {
    let digits = input.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };
    Some(format!("#{}", expanded.to_uppercase()))
}

/// `rgb()` channels as `#RRGGBB`. Channels above 255 are rejected.
pub fn rgb_to_hex(r: u16, g: u16, b: u16) -> Option<String> {
    if r > 255 || g > 255 || b > 255 {
        return None;
    }
    Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
}

/// Every hex and `rgb()`/`rgba()` literal in `text`, normalized, in order of
/// appearance per kind.
pub fn extract_color_literals(text: &str) -> Vec<String> {
    let hex = HEX_RE
        .captures_iter(text)
        .filter_map(|cap| normalize_hex(&cap[1]));
    let rgb = RGB_RE.captures_iter(text).filter_map(|cap| {
        let channel = |i: usize| cap[i].parse::<u16>().ok();
        rgb_to_hex(channel(1)?, channel(2)?, channel(3)?)
    });
    hex.chain(rgb).collect()
}

/// Accumulates weighted color evidence and returns the top colors.
#[derive(Debug, Default)]
pub struct ColorCounter {
    colors: FrequencyMap,
}

impl ColorCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every color literal in `text` with `weight`.
    pub fn add_text(&mut self, text: &str, weight: u32) {
        for hex in extract_color_literals(text) {
            self.colors.add(&hex, &hex, weight);
        }
    }

    pub fn weight(&self, hex: &str) -> u32 {
        normalize_hex(hex)
            .map(|key| self.colors.weight(&key))
            .unwrap_or(0)
    }

    pub fn ranked(&self) -> Vec<ColorEntry> {
        self.colors
            .top(MAX_RANKED_COLORS)
            .into_iter()
            .map(|bucket| ColorEntry {
                hex: bucket.display,
                weight: bucket.weight,
            })
            .collect()
    }
}
