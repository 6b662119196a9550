//! Social media link extraction.
//!
//! This module extracts social media links from HTML documents, identifying
//! platform, URL, and identifier (username/handle) for each link.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use serde::Serialize;

use super::document::Document;
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

// Regex patterns for social media links (matched against resolved, absolute URLs)
const FACEBOOK_URL_PATTERN: &str = r"(?i)^https?://(?:www\.|m\.)?(?:facebook\.com|fb\.com)/([^/?#]+)";
const INSTAGRAM_URL_PATTERN: &str = r"(?i)^https?://(?:www\.)?instagram\.com/([^/?#]+)";
const TWITTER_URL_PATTERN: &str = r"(?i)^https?://(?:www\.)?(?:twitter\.com|x\.com)/([^/?#]+)";
const LINKEDIN_URL_PATTERN: &str =
    r"(?i)^https?://(?:[a-z]{2,3}\.|www\.)?linkedin\.com/(?:company|in|school)/([^/?#]+)";
const YOUTUBE_URL_PATTERN: &str =
    r"(?i)^https?://(?:www\.)?youtube\.com/(?:channel/|c/|user/)?(@?[^/?#]+)";
const TIKTOK_URL_PATTERN: &str = r"(?i)^https?://(?:www\.)?tiktok\.com/@([^/?#]+)";
const TELEGRAM_URL_PATTERN: &str = r"(?i)^https?://(?:www\.)?(?:t\.me|telegram\.me)/([^/?#]+)";
const PINTEREST_URL_PATTERN: &str = r"(?i)^https?://(?:[a-z]{2}\.|www\.)?pinterest\.[a-z.]+/([^/?#]+)";
const GITHUB_URL_PATTERN: &str = r"(?i)^https?://(?:www\.)?github\.com/([^/?#]+)";
const VIBER_URL_PATTERN: &str = r"(?i)^viber://(?:chat|add|pa)\?[^#]*?(?:number|chatURI|id)=([^&#]+)";

/// Path segments that are share/intent endpoints, not profiles.
const NON_PROFILE_SEGMENTS: &[&str] = &[
    "sharer", "sharer.php", "share", "share.php", "intent", "home", "watch", "embed",
    "dialog", "plugins", "hashtag", "search", "login", "signup", "explore", "p",
];

static FACEBOOK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FACEBOOK_URL_PATTERN, "FACEBOOK_RE"));
static INSTAGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(INSTAGRAM_URL_PATTERN, "INSTAGRAM_RE"));
static TWITTER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TWITTER_URL_PATTERN, "TWITTER_RE"));
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINKEDIN_URL_PATTERN, "LINKEDIN_RE"));
static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(YOUTUBE_URL_PATTERN, "YOUTUBE_RE"));
static TIKTOK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TIKTOK_URL_PATTERN, "TIKTOK_RE"));
static TELEGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TELEGRAM_URL_PATTERN, "TELEGRAM_RE"));
static PINTEREST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PINTEREST_URL_PATTERN, "PINTEREST_RE"));
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(GITHUB_URL_PATTERN, "GITHUB_RE"));
static VIBER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(VIBER_URL_PATTERN, "VIBER_RE"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

/// Social media link information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
    /// Username, handle, or ID extracted from the URL
    pub identifier: Option<String>,
}

/// Extracts social media profile links from a document.
///
/// Relative and protocol-relative hrefs are resolved against the page URL. Share
/// buttons (`/sharer.php`, `/intent/...`) are ignored. Each URL is reported once;
/// the first matching platform wins.
pub fn extract_social_media_links(document: &Document) -> Vec<SocialMediaLink> {
    let patterns: [(&LazyLock<Regex>, &str); 10] = [
        (&FACEBOOK_RE, "Facebook"),
        (&INSTAGRAM_RE, "Instagram"),
        (&TWITTER_RE, "Twitter"),
        (&LINKEDIN_RE, "LinkedIn"),
        (&YOUTUBE_RE, "YouTube"),
        (&TIKTOK_RE, "TikTok"),
        (&TELEGRAM_RE, "Telegram"),
        (&PINTEREST_RE, "Pinterest"),
        (&GITHUB_RE, "GitHub"),
        (&VIBER_RE, "Viber"),
    ];

    let mut links = Vec::new();
    let mut seen_urls = HashSet::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let url = if href.trim_start().to_lowercase().starts_with("viber://") {
            href.trim().to_string()
        } else {
            match document.resolve(href) {
                Some(url) => url,
                None => continue,
            }
        };
        if seen_urls.contains(&url) {
            continue;
        }

        for (re, platform_name) in &patterns {
            if let Some(caps) = re.captures(&url) {
                let identifier = caps.get(1).map(|m| m.as_str().to_string());
                if identifier
                    .as_deref()
                    .is_some_and(|id| NON_PROFILE_SEGMENTS.contains(&id.to_lowercase().as_str()))
                {
                    break;
                }
                seen_urls.insert(url.clone());
                links.push(SocialMediaLink {
                    platform: platform_name.to_string(),
                    url,
                    identifier,
                });
                break;
            }
        }
    }

    links
}
