//! SEO report data structures.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parse::JsonLdSummary;

/// A text field judged against an optimal length range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetric {
    pub content: String,
    /// Length in characters
    pub length: usize,
    pub is_optimal: bool,
}

/// Census of one heading level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingLevel {
    pub count: usize,
    /// First non-empty heading texts, in document order
    pub samples: Vec<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingReport {
    pub h1: HeadingLevel,
    pub h2: HeadingLevel,
    pub h3: HeadingLevel,
    pub h4: HeadingLevel,
    pub h5: HeadingLevel,
    pub h6: HeadingLevel,
    pub total: usize,
    /// Skipped levels, e.g. `"H3 used without H2"`
    pub hierarchy_issues: Vec<String>,
}

impl HeadingReport {
    /// Levels H1 through H6 in order.
    pub fn levels(&self) -> [&HeadingLevel; 6] {
        [&self.h1, &self.h2, &self.h3, &self.h4, &self.h5, &self.h6]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    pub internal: usize,
    pub external: usize,
    pub total: usize,
    pub nofollow: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub total: usize,
    /// `<img>` without an `alt` attribute
    pub missing_alt: usize,
    /// `alt` present but blank
    pub empty_alt: usize,
    pub with_alt: usize,
}

/// Keyword usage verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum DensityStatus {
    #[serde(rename = "underused")]
    #[strum(serialize = "underused")]
    Underused,
    #[serde(rename = "optimal")]
    #[strum(serialize = "optimal")]
    Optimal,
    #[serde(rename = "potentially spammy")]
    #[strum(serialize = "potentially spammy")]
    PotentiallySpammy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    pub keyword: String,
    pub occurrences: usize,
    /// Percentage of body words, two decimals
    pub density: f64,
    pub status: DensityStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub total_words: usize,
    pub keywords: Vec<KeywordDensity>,
}

/// Page weight summary, shared with the site audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub load_time_ms: u64,
    /// HTML size in bytes
    pub html_size: usize,
    pub scripts: usize,
    pub stylesheets: usize,
    pub images: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hreflang {
    pub lang: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeo {
    pub keywords: Vec<String>,
    pub open_graph: BTreeMap<String, String>,
    pub twitter_cards: BTreeMap<String, String>,
    pub structured_data: JsonLdSummary,
    pub microdata: Vec<String>,
    pub canonical: Option<String>,
    pub robots: Vec<String>,
    pub hreflang: Vec<Hreflang>,
    pub has_sitemap: bool,
    pub viewport: Option<String>,
    pub charset: Option<String>,
    pub lang: Option<String>,
    pub is_https: bool,
    pub has_favicon: bool,
}

/// Sub-scores, each 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoScores {
    pub title: u32,
    pub description: u32,
    pub h1: u32,
    pub content: u32,
    pub images: u32,
    /// Mean of the other scores
    pub overall: u32,
}

/// Result of the SEO audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub url: String,
    pub final_url: String,
    pub title: TextMetric,
    pub meta_description: TextMetric,
    pub headings: HeadingReport,
    pub links: LinkReport,
    pub images: ImageReport,
    pub performance: PerformanceSummary,
    pub keyword_analysis: KeywordAnalysis,
    pub technical: TechnicalSeo,
    pub scores: SeoScores,
}
