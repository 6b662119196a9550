//! E-mail address extraction.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use scraper::Selector;

use crate::parse::Document;
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

static MAILTO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"a[href^="mailto:" i]"#, "MAILTO_SELECTOR"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.([A-Za-z]{2,24})\b",
        "EMAIL_RE",
    )
});

/// Endings that mark a retina asset name (`logo@2x.png`) rather than an address.
const ASSET_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "webp", "avif", "ico", "css", "js",
];

fn is_asset_like(tld: &str) -> bool {
    ASSET_EXTENSIONS.contains(&tld.to_lowercase().as_str())
}

fn push_unique(emails: &mut Vec<String>, email: String) {
    if !emails.contains(&email) {
        emails.push(email);
    }
}

/// Addresses from `mailto:` links, else from a scan of the raw HTML.
pub fn extract_emails(document: &Document) -> Vec<String> {
    let mut emails = Vec::new();

    for link in document.select(&MAILTO_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let target = href.trim().get(7..).unwrap_or_default();
        let address = target.split('?').next().unwrap_or_default();
        let decoded = percent_decode_str(address).decode_utf8_lossy();
        for candidate in decoded.split(',') {
            if let Some(cap) = EMAIL_RE.captures(candidate.trim()) {
                if !is_asset_like(&cap[1]) {
                    push_unique(&mut emails, cap[0].to_lowercase());
                }
            }
        }
    }

    if !emails.is_empty() {
        return emails;
    }

    for cap in EMAIL_RE.captures_iter(document.html()) {
        if !is_asset_like(&cap[1]) {
            push_unique(&mut emails, cap[0].to_lowercase());
        }
    }
    emails
}
