//! SEO Pro analysis backed by Google Search Console.
//!
//! With an access token the site's own search performance and sitemap data are
//! fetched and formatted; otherwise a fixed demo payload is formatted the same way
//! after an artificial delay.

mod demo;
mod format;
mod search_console;
mod types;

use log::info;

pub use demo::demo_data;
pub use format::{
    format_analysis, recommendations, reporting_period, summarize_coverage, summarize_totals,
    top_queries,
};
pub use search_console::fetch_search_console_data;
pub use types::{
    CoverageSummary, IndexCoverage, OAuthTokens, PerformanceTotals, Period, QueryStat,
    SearchAnalyticsRow, SearchConsoleData, SearchPerformance, SeoProAnalysis, SeoProRequest,
    SitemapContent, SitemapEntry,
};

use crate::config::Config;
use crate::error_handling::AuditError;
use crate::fetch::normalize_url;

/// Handles one analyze request.
///
/// # Errors
///
/// - `AuditError::InvalidInput` if `website` is missing or not a URL
/// - `AuditError::Request` / `AuditError::Upstream` if Search Console fails
pub async fn analyze_seo_pro(
    client: &reqwest::Client,
    config: &Config,
    request: &SeoProRequest,
) -> Result<SeoProAnalysis, AuditError> {
    let website = request
        .website
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| AuditError::InvalidInput("Website URL is required".to_string()))?;
    let site_url = normalize_url(website)?;
    let period = reporting_period(chrono::Utc::now().date_naive());

    match request.live_access_token() {
        Some(token) => {
            info!("SEO Pro analysis of {} from Search Console", site_url);
            let data = fetch_search_console_data(
                client,
                &config.search_console_api_base,
                &site_url,
                token,
                &period,
            )
            .await?;
            Ok(format_analysis(&site_url, &data, period, false))
        }
        None => {
            info!("SEO Pro demo analysis of {}", site_url);
            tokio::time::sleep(config.seo_pro_demo_delay).await;
            Ok(format_analysis(&site_url, &demo_data(), period, true))
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
