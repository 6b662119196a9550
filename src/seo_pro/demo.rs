//! Fixed demo payload shown when no Search Console access is available.

use super::types::{
    IndexCoverage, SearchAnalyticsRow, SearchConsoleData, SearchPerformance, SitemapContent,
    SitemapEntry,
};

#[rustfmt::skip]
const DEMO_QUERIES: &[(&str, f64, f64, f64)] = &[
    // query, clicks, impressions, position
    ("seo audit tool",          412.0, 9_850.0,  3.2),
    ("website analyzer",        287.0, 12_400.0, 5.8),
    ("check website speed",     164.0, 8_120.0,  7.4),
    ("free seo checker",        131.0, 15_300.0, 9.1),
    ("meta description length",  96.0, 2_410.0,  2.6),
    ("what cms is this site",    74.0, 3_980.0,  6.3),
    ("find website fonts",       58.0, 4_770.0, 11.7),
    ("website color palette",    41.0, 5_020.0, 14.2),
];

/// Demo Search Console data, identical for every website.
pub fn demo_data() -> SearchConsoleData {
    let rows = DEMO_QUERIES
        .iter()
        .map(|(query, clicks, impressions, position)| SearchAnalyticsRow {
            keys: vec![query.to_string()],
            clicks: *clicks,
            impressions: *impressions,
            ctr: clicks / impressions,
            position: *position,
        })
        .collect();

    let sitemap = vec![
        SitemapEntry {
            path: "/sitemap.xml".to_string(),
            is_pending: false,
            errors: 0,
            warnings: 2,
            contents: vec![SitemapContent {
                content_type: "web".to_string(),
                submitted: 248,
                indexed: 187,
            }],
        },
        SitemapEntry {
            path: "/blog-sitemap.xml".to_string(),
            is_pending: false,
            errors: 1,
            warnings: 0,
            contents: vec![SitemapContent {
                content_type: "web".to_string(),
                submitted: 64,
                indexed: 51,
            }],
        },
    ];

    SearchConsoleData {
        search_performance: SearchPerformance { rows },
        index_coverage: IndexCoverage { sitemap },
    }
}
