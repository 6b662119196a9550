//! Turns raw Search Console data into the SEO Pro analysis.

use chrono::{Duration, NaiveDate};

use super::types::{
    CoverageSummary, PerformanceTotals, Period, QueryStat, SearchAnalyticsRow, SearchConsoleData,
    SeoProAnalysis,
};
use crate::config::{MAX_TOP_QUERIES, SEARCH_CONSOLE_WINDOW_DAYS};
use crate::utils::round_to;

const LOW_CTR_PERCENT: f64 = 2.0;
const FIRST_PAGE_POSITION: f64 = 10.0;
const STRIKING_DISTANCE: (f64, f64) = (4.0, 10.0);
const LOW_INDEX_RATE_PERCENT: f64 = 80.0;

/// Reporting window ending on `today`.
pub fn reporting_period(today: NaiveDate) -> Period {
    let start = today - Duration::days(SEARCH_CONSOLE_WINDOW_DAYS);
    Period {
        start_date: start.format("%Y-%m-%d").to_string(),
        end_date: today.format("%Y-%m-%d").to_string(),
    }
}

fn percent(part: f64, whole: f64, decimals: u32) -> f64 {
    if whole > 0.0 {
        round_to(part / whole * 100.0, decimals)
    } else {
        0.0
    }
}

/// Clicks, impressions, CTR and impression-weighted position over all rows.
pub fn summarize_totals(rows: &[SearchAnalyticsRow]) -> PerformanceTotals {
    let clicks: f64 = rows.iter().map(|r| r.clicks).sum();
    let impressions: f64 = rows.iter().map(|r| r.impressions).sum();
    let weighted_position: f64 = rows.iter().map(|r| r.position * r.impressions).sum();

    PerformanceTotals {
        clicks: clicks.round() as u64,
        impressions: impressions.round() as u64,
        ctr: percent(clicks, impressions, 2),
        average_position: if impressions > 0.0 {
            round_to(weighted_position / impressions, 1)
        } else {
            0.0
        },
    }
}

/// Queries by clicks, descending. Ties keep the API order.
pub fn top_queries(rows: &[SearchAnalyticsRow]) -> Vec<QueryStat> {
    let mut queries: Vec<QueryStat> = rows
        .iter()
        .filter_map(|row| {
            Some(QueryStat {
                query: row.keys.first()?.clone(),
                clicks: row.clicks.round() as u64,
                impressions: row.impressions.round() as u64,
                ctr: round_to(row.ctr * 100.0, 2),
                position: round_to(row.position, 1),
            })
        })
        .collect();
    queries.sort_by_key(|q| std::cmp::Reverse(q.clicks));
    queries.truncate(MAX_TOP_QUERIES);
    queries
}

pub fn summarize_coverage(data: &SearchConsoleData) -> CoverageSummary {
    let sitemaps = &data.index_coverage.sitemap;
    let submitted: u64 = sitemaps
        .iter()
        .flat_map(|s| &s.contents)
        .map(|c| c.submitted)
        .sum();
    let indexed: u64 = sitemaps
        .iter()
        .flat_map(|s| &s.contents)
        .map(|c| c.indexed)
        .sum();

    CoverageSummary {
        sitemaps: sitemaps.len(),
        pending_sitemaps: sitemaps.iter().filter(|s| s.is_pending).count(),
        submitted,
        indexed,
        index_rate: percent(indexed as f64, submitted as f64, 1),
        errors: sitemaps.iter().map(|s| s.errors).sum(),
        warnings: sitemaps.iter().map(|s| s.warnings).sum(),
    }
}

/// Actionable advice, most impactful first.
pub fn recommendations(
    totals: &PerformanceTotals,
    queries: &[QueryStat],
    coverage: &CoverageSummary,
) -> Vec<String> {
    let mut advice = Vec::new();

    if coverage.sitemaps == 0 {
        advice.push("Submit an XML sitemap in Search Console".to_string());
    }
    if coverage.errors > 0 {
        advice.push(format!(
            "Fix {} sitemap error(s) reported by Search Console",
            coverage.errors
        ));
    }
    if coverage.submitted > 0 && coverage.index_rate < LOW_INDEX_RATE_PERCENT {
        advice.push(format!(
            "Only {}% of submitted URLs are indexed; review the page indexing report",
            coverage.index_rate
        ));
    }
    if totals.impressions > 0 && totals.ctr < LOW_CTR_PERCENT {
        advice.push(format!(
            "Click-through rate is {}%; rewrite titles and meta descriptions of the top pages",
            totals.ctr
        ));
    }
    if totals.average_position > FIRST_PAGE_POSITION {
        advice.push(format!(
            "Average position is {}; most impressions come from beyond the first page",
            totals.average_position
        ));
    }
    let striking = queries
        .iter()
        .filter(|q| (STRIKING_DISTANCE.0..=STRIKING_DISTANCE.1).contains(&q.position))
        .count();
    if striking > 0 {
        advice.push(format!(
            "{} top {} on positions 4-10; strengthen the landing pages",
            striking,
            if striking == 1 { "query ranks" } else { "queries rank" }
        ));
    }

    if advice.is_empty() {
        advice.push("No critical issues found; keep monitoring performance".to_string());
    }
    advice
}

/// Formats Search Console data for `website` over `period`.
pub fn format_analysis(
    website: &str,
    data: &SearchConsoleData,
    period: Period,
    is_demo: bool,
) -> SeoProAnalysis {
    let rows = &data.search_performance.rows;
    let totals = summarize_totals(rows);
    let top_queries = top_queries(rows);
    let coverage = summarize_coverage(data);
    let recommendations = recommendations(&totals, &top_queries, &coverage);

    SeoProAnalysis {
        website: website.to_string(),
        is_demo,
        period,
        totals,
        top_queries,
        coverage,
        recommendations,
    }
}
