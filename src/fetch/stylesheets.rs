//! Sequential fetching of linked stylesheets.

use std::time::Duration;

use log::warn;

use super::request::{read_body_capped, send_checked};
use crate::config::MAX_STYLESHEET_SIZE;
use crate::error_handling::{
    categorize_reqwest_error, categorize_status, AuditError, ErrorType, ProcessingStats,
    WarningType,
};

/// Hosts whose stylesheets are font-service loaders rather than site CSS.
///
/// The font extractor reads these links directly, so they are never fetched.
const FONT_SERVICE_HOSTS: &[&str] = &[
    "fonts.googleapis.com",
    "use.typekit.net",
    "p.typekit.net",
    "use.adobe.com",
];

/// Whether `url` points at a font service (Google Fonts, Typekit, Adobe Fonts).
pub fn is_font_service_url(url: &str) -> bool {
    let host = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase));
    match host {
        Some(host) => FONT_SERVICE_HOSTS.iter().any(|h| host == *h),
        None => false,
    }
}

/// One successfully fetched stylesheet.
#[derive(Debug, Clone)]
pub struct FetchedStylesheet {
    pub url: String,
    pub css: String,
}

/// Fetches up to `limit` stylesheets one after another, in the given order.
///
/// Every fetch carries its own `timeout`. A failed fetch is logged, counted as
/// `WarningType::StylesheetFetchFailed` and skipped; the remaining URLs are still
/// attempted. Bodies larger than `MAX_STYLESHEET_SIZE` are dropped without being
/// read in full.
pub async fn fetch_stylesheets(
    client: &reqwest::Client,
    urls: &[String],
    limit: usize,
    timeout: Duration,
    stats: &ProcessingStats,
) -> Vec<FetchedStylesheet> {
    let mut fetched = Vec::new();

    for url in urls.iter().take(limit) {
        let response = match send_checked(client, url, timeout).await {
            Ok(response) => response,
            Err(e) => {
                record_failure(url, &e, stats);
                continue;
            }
        };
        let final_url = response.url().to_string();

        match read_body_capped(response, MAX_STYLESHEET_SIZE).await {
            Ok(Some(css)) => fetched.push(FetchedStylesheet {
                url: final_url,
                css,
            }),
            Ok(None) => {
                warn!(
                    "Skipping stylesheet {} (larger than {} bytes)",
                    url, MAX_STYLESHEET_SIZE
                );
                stats.increment_warning(WarningType::StylesheetTooLarge);
            }
            Err(e) => record_failure(url, &AuditError::Request(e), stats),
        }
    }

    fetched
}

fn record_failure(url: &str, error: &AuditError, stats: &ProcessingStats) {
    warn!("Failed to fetch stylesheet {}: {}", url, error);
    if let Some(category) = error_category(error) {
        stats.increment_error(category);
    }
    stats.increment_warning(WarningType::StylesheetFetchFailed);
}

fn error_category(error: &AuditError) -> Option<ErrorType> {
    match error {
        AuditError::HttpStatus { status, .. } => Some(categorize_status(*status)),
        AuditError::Request(e) => Some(categorize_reqwest_error(e)),
        AuditError::InvalidInput(_) | AuditError::Upstream(_) => None,
    }
}
