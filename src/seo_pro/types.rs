//! SEO Pro request, Search Console data and analysis types.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /seo-audit-pro/analyze`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoProRequest {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tokens: Option<OAuthTokens>,
    #[serde(default)]
    pub use_mock_data: Option<bool>,
}

/// OAuth tokens obtained by the front end. Only the access token is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthTokens {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl SeoProRequest {
    /// Access token to query Search Console with, unless mock data was requested.
    pub fn live_access_token(&self) -> Option<&str> {
        if self.use_mock_data == Some(true) {
            return None;
        }
        self.tokens
            .as_ref()
            .and_then(|t| t.access_token.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Search Console returns 64-bit counters as JSON strings.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or_default(),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// One row of a search analytics query grouped by `query`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsRow {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub clicks: f64,
    #[serde(default)]
    pub impressions: f64,
    /// Fraction, 0..=1
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub position: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPerformance {
    #[serde(default)]
    pub rows: Vec<SearchAnalyticsRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapContent {
    #[serde(default, rename = "type")]
    pub content_type: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub submitted: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub indexed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub is_pending: bool,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub errors: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub warnings: u64,
    #[serde(default)]
    pub contents: Vec<SitemapContent>,
}

/// Sitemaps list; Search Console names the array `sitemap`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IndexCoverage {
    #[serde(default)]
    pub sitemap: Vec<SitemapEntry>,
}

/// Raw Search Console data the analysis is computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchConsoleData {
    pub search_performance: SearchPerformance,
    pub index_coverage: IndexCoverage,
}

/// Reporting window, ISO dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTotals {
    pub clicks: u64,
    pub impressions: u64,
    /// Percent, two decimals
    pub ctr: f64,
    /// Impression-weighted, one decimal
    pub average_position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStat {
    pub query: String,
    pub clicks: u64,
    pub impressions: u64,
    /// Percent, two decimals
    pub ctr: f64,
    pub position: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub sitemaps: usize,
    pub pending_sitemaps: usize,
    pub submitted: u64,
    pub indexed: u64,
    /// Percent of submitted URLs that are indexed, one decimal
    pub index_rate: f64,
    pub errors: u64,
    pub warnings: u64,
}

/// Result of `POST /seo-audit-pro/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoProAnalysis {
    pub website: String,
    /// The figures are the fixed demo payload, not the site's data
    pub is_demo: bool,
    pub period: Period,
    pub totals: PerformanceTotals,
    pub top_queries: Vec<QueryStat>,
    pub coverage: CoverageSummary,
    pub recommendations: Vec<String>,
}
