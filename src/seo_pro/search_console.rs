//! Search Console API client.
//!
//! Two read-only calls per analysis: the search analytics query grouped by
//! `query` and the sitemaps list. Both use the caller's OAuth access token.

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::types::{IndexCoverage, Period, SearchConsoleData, SearchPerformance};
use crate::config::SEARCH_CONSOLE_ROW_LIMIT;
use crate::error_handling::{categorize_reqwest_error, AuditError};

/// Site URLs are a single path segment in the API.
const SITE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn site_endpoint(api_base: &str, site_url: &str) -> String {
    format!(
        "{}/sites/{}",
        api_base.trim_end_matches('/'),
        utf8_percent_encode(site_url, SITE_SEGMENT)
    )
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T, AuditError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AuditError::Upstream(format!(
            "Search Console {} returned HTTP {}",
            what,
            status.as_u16()
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AuditError::Upstream(format!("Unreadable Search Console {}: {}", what, e)))
}

fn transport_error(what: &str, e: reqwest::Error) -> AuditError {
    debug!(
        "{} while querying Search Console {}: {}",
        categorize_reqwest_error(&e),
        what,
        e
    );
    AuditError::Request(e)
}

/// Fetches the search performance and sitemap data of `site_url`.
///
/// # Errors
///
/// `AuditError::Request` on transport failures, `AuditError::Upstream` on a
/// non-2xx status or an unreadable body.
pub async fn fetch_search_console_data(
    client: &reqwest::Client,
    api_base: &str,
    site_url: &str,
    access_token: &str,
    period: &Period,
) -> Result<SearchConsoleData, AuditError> {
    let endpoint = site_endpoint(api_base, site_url);

    let analytics = client
        .post(format!("{endpoint}/searchAnalytics/query"))
        .bearer_auth(access_token)
        .json(&json!({
            "startDate": period.start_date,
            "endDate": period.end_date,
            "dimensions": ["query"],
            "rowLimit": SEARCH_CONSOLE_ROW_LIMIT,
        }))
        .send()
        .await
        .map_err(|e| transport_error("search analytics", e))?;
    let search_performance: SearchPerformance = read_json(analytics, "search analytics").await?;

    let sitemaps = client
        .get(format!("{endpoint}/sitemaps"))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| transport_error("sitemaps", e))?;
    let index_coverage: IndexCoverage = read_json(sitemaps, "sitemaps").await?;

    debug!(
        "Search Console: {} query row(s), {} sitemap(s) for {}",
        search_performance.rows.len(),
        index_coverage.sitemap.len(),
        site_url
    );

    Ok(SearchConsoleData {
        search_performance,
        index_coverage,
    })
}
