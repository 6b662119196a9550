//! SEO audit of a single page.

use log::info;

use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{AuditError, ProcessingStats};
use crate::fetch::{fetch_page, normalize_url};
use crate::parse::Document;
use crate::seo::{analyze_seo, SeoReport};

/// Fetches `input` and runs the SEO structural analysis on it.
///
/// # Errors
///
/// Same as [`run_site_audit`](super::run_site_audit): invalid input or a failed
/// page fetch.
pub async fn run_seo_audit(
    client: &reqwest::Client,
    config: &Config,
    input: &str,
) -> Result<SeoReport, AuditError> {
    let url = normalize_url(input)?;
    info!("SEO audit of {}", url);

    let stats = ProcessingStats::new();
    let page = fetch_page(client, &url, config.page_timeout, MAX_RESPONSE_BODY_SIZE).await?;
    let document = Document::parse(&page.html, &page.final_url);
    let report = analyze_seo(&document, &page, &stats);

    stats.log_summary(&page.final_url);
    Ok(report)
}
