//! Structured data extraction.
//!
//! This module extracts structured data from HTML documents including:
//! - JSON-LD (application/ld+json)
//! - Open Graph meta tags (og:*)
//! - Twitter Card meta tags (twitter:*)
//! - Microdata item types

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::Selector;
use serde::Serialize;

use super::document::Document;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::parse_selector_unsafe;

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"script[type="application/ld+json" i]"#,
        "JSON_LD_SELECTOR",
    )
});
static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[property^="og:"]"#, "OPEN_GRAPH_SELECTOR"));
static TWITTER_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[name^="twitter:"]"#, "TWITTER_NAME_SELECTOR"));
static TWITTER_PROPERTY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[property^="twitter:"]"#, "TWITTER_PROPERTY_SELECTOR")
});
static ITEMTYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[itemtype]", "ITEMTYPE_SELECTOR"));

/// JSON-LD summary: parsed block count and declared `@type`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JsonLdSummary {
    pub count: usize,
    pub types: Vec<String>,
}

/// Structured data extracted from HTML.
#[derive(Debug, Clone, Default)]
pub struct StructuredData {
    pub json_ld: JsonLdSummary,
    /// Open Graph meta tags (og:*), first occurrence wins
    pub open_graph: BTreeMap<String, String>,
    /// Twitter Card meta tags (twitter:*), first occurrence wins
    pub twitter_cards: BTreeMap<String, String>,
    /// Distinct microdata `itemtype` values in document order
    pub microdata: Vec<String>,
}

/// Extracts structured data from a document.
///
/// A JSON-LD block that fails to parse is skipped and counted as
/// `WarningType::JsonLdParseFailed`; the remaining blocks are still read.
pub fn extract_structured_data(document: &Document, stats: &ProcessingStats) -> StructuredData {
    StructuredData {
        json_ld: extract_json_ld(document, stats),
        open_graph: extract_prefixed_meta(document, &OPEN_GRAPH_SELECTOR, "property"),
        twitter_cards: {
            let mut cards = extract_prefixed_meta(document, &TWITTER_NAME_SELECTOR, "name");
            for (k, v) in extract_prefixed_meta(document, &TWITTER_PROPERTY_SELECTOR, "property") {
                cards.entry(k).or_insert(v);
            }
            cards
        },
        microdata: extract_microdata(document),
    }
}

fn extract_json_ld(document: &Document, stats: &ProcessingStats) -> JsonLdSummary {
    let mut summary = JsonLdSummary::default();

    for script in document.select(&JSON_LD_SELECTOR) {
        let raw: String = script.text().collect();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => {
                summary.count += 1;
                collect_types(&value, &mut summary.types);
            }
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD block: {}", e);
                stats.increment_warning(WarningType::JsonLdParseFailed);
            }
        }
    }

    summary
}

/// Collects `@type` values from a JSON-LD value, descending into arrays and `@graph`.
fn collect_types(value: &serde_json::Value, types: &mut Vec<String>) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                collect_types(item, types);
            }
        }
        serde_json::Value::Object(obj) => {
            match obj.get("@type") {
                Some(serde_json::Value::String(t)) => push_unique(types, t),
                Some(serde_json::Value::Array(ts)) => {
                    for t in ts.iter().filter_map(|t| t.as_str()) {
                        push_unique(types, t);
                    }
                }
                _ => {}
            }
            if let Some(graph) = obj.get("@graph") {
                collect_types(graph, types);
            }
        }
        _ => {}
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

fn extract_prefixed_meta(
    document: &Document,
    selector: &Selector,
    key_attr: &str,
) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    for element in document.select(selector) {
        if let (Some(key), Some(content)) = (
            element.value().attr(key_attr),
            element.value().attr("content"),
        ) {
            tags.entry(key.trim().to_lowercase())
                .or_insert_with(|| content.trim().to_string());
        }
    }
    tags
}

fn extract_microdata(document: &Document) -> Vec<String> {
    let mut types = Vec::new();
    for value in document.attr_values(&ITEMTYPE_SELECTOR, "itemtype") {
        for item_type in value.split_whitespace() {
            push_unique(&mut types, item_type);
        }
    }
    types
}
