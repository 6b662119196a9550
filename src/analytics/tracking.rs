//! Analytics and tracking ID extraction.
//!
//! This module extracts tracking IDs from HTML content and inline JavaScript,
//! including Google Analytics, Google Ads, Meta Pixel, Google Tag Manager, AdSense
//! and Yandex Metrica.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::utils::compile_regex_unsafe;

/// Analytics/Tracking ID extracted from HTML/JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrackingId {
    /// Analytics provider (e.g., "Google Analytics", "Meta Pixel", "Google Tag Manager")
    pub provider: String,
    /// The tracking ID (e.g., "UA-123456-1", "G-XXXXXXXXXX", "GTM-XXXXX")
    pub id: String,
}

// ga('create', 'UA-XXXXX-Y')
static GA_UA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)ga\s*\(\s*['"]create['"]\s*,\s*['"](UA-\d+-\d+)['"]"#,
        "GA_UA_PATTERN",
    )
});

// gtag/js?id=G-XXXX or gtag('config', 'G-XXXX')
static GA4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)(?:gtag/js\?id=|gtag\s*\(\s*['"]config['"]\s*,\s*['"])(G-[A-Z0-9]{4,})"#,
        "GA4_PATTERN",
    )
});

// gtag/js?id=AW-XXXX or gtag('config', 'AW-XXXX')
static GOOGLE_ADS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)(?:gtag/js\?id=|gtag\s*\(\s*['"]config['"]\s*,\s*['"])(AW-\d+)"#,
        "GOOGLE_ADS_PATTERN",
    )
});

// fbq('init', 'XXXXX')
static META_PIXEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)fbq\s*\(\s*['"]init['"]\s*,\s*['"](\d+)['"]"#,
        "META_PIXEL_PATTERN",
    )
});

// Standalone GTM IDs, anywhere (script src, iframe src, dataLayer snippets)
static GTM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r#"\b(GTM-[A-Z0-9]{4,})\b"#, "GTM_PATTERN"));

// AdSense publisher IDs are 16 digits; require at least 10 to avoid "pub-1"
static ADSENSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r#"(?i)(?:ca-)?pub-(\d{10,})"#, "ADSENSE_PATTERN"));

// ym(12345678, "init", ...) or mc.yandex.ru/watch/12345678
static YANDEX_METRICA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)(?:\bym\s*\(\s*(\d{5,})\s*,\s*['"]init['"]|mc\.yandex\.(?:ru|com)/watch/(\d{5,}))"#,
        "YANDEX_METRICA_PATTERN",
    )
});

/// Extracts tracking IDs from the raw HTML.
///
/// IDs are deduplicated by (provider, id) and returned in provider order, then
/// document order.
pub fn extract_tracking_ids(html: &str) -> Vec<TrackingId> {
    let mut ids = Vec::new();
    let mut seen = HashSet::<(&'static str, String)>::new();

    let mut push = |provider: &'static str, id: String| {
        if seen.insert((provider, id.clone())) {
            ids.push(TrackingId {
                provider: provider.to_string(),
                id,
            });
        }
    };

    let simple: [(&'static str, &LazyLock<Regex>); 5] = [
        ("Google Analytics", &GA_UA_PATTERN),
        ("Google Analytics 4", &GA4_PATTERN),
        ("Google Ads", &GOOGLE_ADS_PATTERN),
        ("Meta Pixel", &META_PIXEL_PATTERN),
        ("Google Tag Manager", &GTM_PATTERN),
    ];
    for (provider, pattern) in simple {
        for cap in pattern.captures_iter(html) {
            if let Some(id) = cap.get(1) {
                push(provider, id.as_str().to_uppercase());
            }
        }
    }

    for cap in ADSENSE_PATTERN.captures_iter(html) {
        if let Some(id) = cap.get(1) {
            push("Google AdSense", format!("pub-{}", id.as_str()));
        }
    }

    for cap in YANDEX_METRICA_PATTERN.captures_iter(html) {
        if let Some(id) = cap.get(1).or_else(|| cap.get(2)) {
            push("Yandex Metrica", id.as_str().to_string());
        }
    }

    ids
}
