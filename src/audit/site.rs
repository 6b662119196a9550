//! Site audit: one page fetch, every evaluator, then the stylesheet pass.

use log::{debug, info};

use super::report::{AuditReport, BasicInfo};
use crate::analytics::{detect_marketing_tags, extract_tracking_ids};
use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::contact::extract_contacts;
use crate::domain::analyze_domain;
use crate::error_handling::{AuditError, ProcessingStats};
use crate::fetch::{fetch_page, fetch_stylesheets, normalize_url, FetchResult};
use crate::hosting::analyze_hosting;
use crate::parse::{
    extract_charset, extract_generator, extract_lang, extract_meta_description, extract_title,
    extract_social_media_links, Document,
};
use crate::seo::summarize_performance;
use crate::tech::detect_technologies;
use crate::visual::{
    collect_visual_sources, detect_logo, extract_colors, extract_fonts, resolve_favicon,
    VisualReport,
};

fn basic_info(document: &Document, page: &FetchResult, stats: &ProcessingStats) -> BasicInfo {
    BasicInfo {
        url: page.url.clone(),
        final_url: page.final_url.clone(),
        status_code: page.http_status,
        title: extract_title(document, stats),
        description: extract_meta_description(document, stats),
        language: extract_lang(document),
        charset: extract_charset(document),
        generator: extract_generator(document),
        http_version: page.http_version.clone(),
        load_time_ms: page.load_time_ms,
    }
}

/// Runs the full technical audit of `input`.
///
/// `input` may omit the scheme; `https://` is assumed. Only an unusable input and a
/// failed page fetch abort the audit. Stylesheet failures shrink the font and
/// color evidence but never fail the report.
///
/// # Errors
///
/// - `AuditError::InvalidInput` if `input` is empty or not a URL (no request is made)
/// - `AuditError::HttpStatus` / `AuditError::Request` if the page fetch fails
pub async fn run_site_audit(
    client: &reqwest::Client,
    config: &Config,
    input: &str,
) -> Result<AuditReport, AuditError> {
    let url = normalize_url(input)?;
    info!("Site audit of {}", url);

    let stats = ProcessingStats::new();
    let page = fetch_page(client, &url, config.page_timeout, MAX_RESPONSE_BODY_SIZE).await?;

    // The parsed DOM is not Send, so it must be gone before the stylesheet fetches.
    let (mut report, sources) = {
        let document = Document::parse(&page.html, &page.final_url);
        let host = document.host().unwrap_or_default();

        let report = AuditReport {
            basic: basic_info(&document, &page, &stats),
            technologies: detect_technologies(&document, &page.headers),
            analytics: detect_marketing_tags(document.html_lower()),
            tracking_ids: extract_tracking_ids(document.html()),
            visual: VisualReport {
                logo: detect_logo(&document),
                favicon: resolve_favicon(&document),
                ..Default::default()
            },
            hosting: analyze_hosting(&document, &page),
            domain: analyze_domain(&host),
            social: extract_social_media_links(&document),
            contact: extract_contacts(&document),
            performance: summarize_performance(&document, &page),
        };
        (report, collect_visual_sources(&document))
    };

    debug!(
        "{} stylesheet(s) linked from {}",
        sources.stylesheet_urls.len(),
        page.final_url
    );
    let stylesheets = fetch_stylesheets(
        client,
        &sources.stylesheet_urls,
        config.max_color_stylesheets,
        config.stylesheet_timeout,
        &stats,
    )
    .await;

    report.visual.fonts = extract_fonts(&sources, &stylesheets, config.max_font_stylesheets);
    report.visual.colors = extract_colors(&page.html, &sources, &stylesheets);

    stats.log_summary(&page.final_url);
    Ok(report)
}
