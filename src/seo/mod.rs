//! SEO structural analysis.
//!
//! Every function here is a synchronous pass over an already parsed
//! [`Document`]; `analyze_seo` assembles them into a [`SeoReport`].

mod headings;
mod images;
mod keywords;
mod links;
mod scores;
mod technical;
mod types;

pub use headings::{analyze_headings, hierarchy_issues};
pub use images::analyze_images;
pub use keywords::{analyze_keywords, density_status, title_keywords};
pub use links::{analyze_links, site_domain};
pub use scores::{compute_scores, content_score, h1_score, image_alt_score, length_score};
pub use technical::{analyze_technical, summarize_performance};
pub use types::{
    DensityStatus, HeadingLevel, HeadingReport, Hreflang, ImageReport, KeywordAnalysis,
    KeywordDensity, LinkReport, PerformanceSummary, SeoReport, SeoScores, TechnicalSeo,
    TextMetric,
};

use crate::config::{DESCRIPTION_OPTIMAL_RANGE, TITLE_OPTIMAL_RANGE};
use crate::error_handling::ProcessingStats;
use crate::fetch::FetchResult;
use crate::parse::{extract_meta_description, extract_title, Document};

/// Measures `content` against an inclusive character range.
pub fn text_metric(content: String, range: (usize, usize)) -> TextMetric {
    let length = content.chars().count();
    TextMetric {
        is_optimal: (range.0..=range.1).contains(&length),
        length,
        content,
    }
}

/// Runs every SEO pass over a fetched and parsed page.
pub fn analyze_seo(document: &Document, page: &FetchResult, stats: &ProcessingStats) -> SeoReport {
    let title = text_metric(extract_title(document, stats), TITLE_OPTIMAL_RANGE);
    let meta_description = text_metric(
        extract_meta_description(document, stats),
        DESCRIPTION_OPTIMAL_RANGE,
    );
    let headings = analyze_headings(document);
    let images = analyze_images(document);
    let keyword_analysis = analyze_keywords(&title.content, &document.body_text());
    let scores = compute_scores(
        title.length,
        meta_description.length,
        headings.h1.count,
        keyword_analysis.total_words,
        &images,
    );

    SeoReport {
        url: page.url.clone(),
        final_url: page.final_url.clone(),
        links: analyze_links(document, stats),
        performance: summarize_performance(document, page),
        technical: analyze_technical(document, page.is_https(), stats),
        title,
        meta_description,
        headings,
        images,
        keyword_analysis,
        scores,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
