//! Technical SEO signals and page weight.

use std::sync::LazyLock;

use scraper::Selector;

use super::types::{Hreflang, PerformanceSummary, TechnicalSeo};
use crate::error_handling::ProcessingStats;
use crate::fetch::FetchResult;
use crate::parse::{
    extract_canonical, extract_charset, extract_lang, extract_meta_keywords, extract_robots,
    extract_structured_data, extract_viewport, Document,
};
use crate::utils::parse_selector_unsafe;

static HREFLANG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"link[rel="alternate" i][hreflang][href]"#, "HREFLANG_SELECTOR")
});
static SITEMAP_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"link[rel="sitemap" i], a[href*="sitemap" i], link[href*="sitemap" i]"#,
        "SITEMAP_LINK_SELECTOR",
    )
});
static FAVICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"link[rel*="icon" i][href]"#, "FAVICON_SELECTOR"));
static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script[src]", "SCRIPT_SRC_SELECTOR"));
static STYLESHEET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"link[rel~="stylesheet" i]"#, "STYLESHEET_SELECTOR")
});
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));

fn extract_hreflang(document: &Document) -> Vec<Hreflang> {
    document
        .select(&HREFLANG_SELECTOR)
        .filter_map(|link| {
            let lang = link.value().attr("hreflang")?.trim();
            let href = document.resolve(link.value().attr("href")?)?;
            Some(Hreflang {
                lang: lang.to_string(),
                href,
            })
        })
        .collect()
}

pub fn analyze_technical(
    document: &Document,
    is_https: bool,
    stats: &ProcessingStats,
) -> TechnicalSeo {
    let structured = extract_structured_data(document, stats);

    TechnicalSeo {
        keywords: extract_meta_keywords(document),
        open_graph: structured.open_graph,
        twitter_cards: structured.twitter_cards,
        structured_data: structured.json_ld,
        microdata: structured.microdata,
        canonical: extract_canonical(document),
        robots: extract_robots(document),
        hreflang: extract_hreflang(document),
        has_sitemap: document.exists(&SITEMAP_LINK_SELECTOR),
        viewport: extract_viewport(document),
        charset: extract_charset(document),
        lang: extract_lang(document),
        is_https,
        has_favicon: document.exists(&FAVICON_SELECTOR),
    }
}

/// Load time, HTML size and asset counts.
pub fn summarize_performance(document: &Document, page: &FetchResult) -> PerformanceSummary {
    PerformanceSummary {
        load_time_ms: page.load_time_ms,
        html_size: page.html.len(),
        scripts: document.select(&SCRIPT_SRC_SELECTOR).count(),
        stylesheets: document.select(&STYLESHEET_SELECTOR).count(),
        images: document.select(&IMG_SELECTOR).count(),
    }
}
