//! Internal/external link classification.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use super::types::LinkReport;
use crate::domain::normalize_domain;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::parse::{extract_canonical, Document};
use crate::utils::parse_selector_unsafe;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));
static OG_URL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[property="og:url"][content]"#, "OG_URL_SELECTOR"));

/// Hrefs that are not navigations to a page.
const IGNORED_PREFIXES: &[&str] = &["#", "javascript:", "mailto:", "tel:"];

/// Domain links are compared against: canonical host, else `og:url` host, else
/// the page host. `www.` is ignored.
pub fn site_domain(document: &Document) -> Option<String> {
    let host_of = |url: String| {
        Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(normalize_domain))
    };
    extract_canonical(document)
        .and_then(host_of)
        .or_else(|| document.first_attr(&OG_URL_SELECTOR, "content").and_then(host_of))
        .or_else(|| document.host().map(|h| normalize_domain(&h)))
}

enum LinkTarget {
    Internal,
    External,
    Skipped,
}

fn classify(href: &str, site: Option<&str>, stats: &ProcessingStats) -> LinkTarget {
    let lower = href.to_lowercase();
    if href.is_empty() || IGNORED_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return LinkTarget::Skipped;
    }

    let absolute = if let Some(rest) = href.strip_prefix("//") {
        Url::parse(&format!("https://{rest}"))
    } else if lower.starts_with("http://") || lower.starts_with("https://") {
        Url::parse(href)
    } else if lower.contains(':') && Url::parse(href).is_ok() {
        // ftp:, data:, sms: and other non-page schemes
        return LinkTarget::Skipped;
    } else {
        return LinkTarget::Internal;
    };

    match absolute {
        Ok(url) => {
            let host = url.host_str().map(normalize_domain);
            match (host.as_deref(), site) {
                (Some(host), Some(site)) if host == site => LinkTarget::Internal,
                _ => LinkTarget::External,
            }
        }
        Err(e) => {
            log::debug!("Skipping malformed link '{}': {}", href, e);
            stats.increment_warning(WarningType::InvalidLinkUrl);
            LinkTarget::Skipped
        }
    }
}

/// Counts internal, external and `nofollow` links.
///
/// Relative links are internal. Fragment, `javascript:`, `mailto:` and `tel:`
/// links are ignored. Malformed absolute links are excluded and counted as
/// `WarningType::InvalidLinkUrl`.
pub fn analyze_links(document: &Document, stats: &ProcessingStats) -> LinkReport {
    let site = site_domain(document);
    let mut report = LinkReport::default();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let href = anchor.value().attr("href").unwrap_or_default().trim();
        match classify(href, site.as_deref(), stats) {
            LinkTarget::Internal => report.internal += 1,
            LinkTarget::External => report.external += 1,
            LinkTarget::Skipped => continue,
        }
        let nofollow = anchor
            .value()
            .attr("rel")
            .is_some_and(|rel| rel.to_lowercase().split_whitespace().any(|r| r == "nofollow"));
        if nofollow {
            report.nofollow += 1;
        }
    }

    report.total = report.internal + report.external;
    report
}
