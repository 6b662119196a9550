// Parse module tests.

use super::*;
use crate::error_handling::{ProcessingStats, WarningType};

fn doc(html: &str) -> Document {
    Document::parse(html, "https://www.example.com/blog/post")
}

#[test]
fn test_document_tolerates_malformed_markup() {
    let d = doc("<html><body><div><p>Unclosed <b>tags <i>everywhere</div><h1>Title");
    assert!(d.body_text().contains("Unclosed"));
    assert!(d.body_text().contains("Title"));
}

#[test]
fn test_document_keeps_lowercased_copy() {
    let d = doc("<HTML><Body>WP-Content</Body></HTML>");
    assert!(d.html().contains("WP-Content"));
    assert!(d.html_lower().contains("wp-content"));
}

#[test]
fn test_body_text_skips_scripts_and_styles() {
    let d = doc(
        "<html><head><title>T</title></head><body><p>Hello   world</p>\
         <script>var hidden = 1;</script><style>.x{color:red}</style><p>again</p></body></html>",
    );
    assert_eq!(d.body_text(), "Hello world again");
}

#[test]
fn test_resolve_relative_urls() {
    let d = doc("<html></html>");
    assert_eq!(
        d.resolve("/favicon.ico").as_deref(),
        Some("https://www.example.com/favicon.ico")
    );
    assert_eq!(
        d.resolve("img/logo.png").as_deref(),
        Some("https://www.example.com/blog/img/logo.png")
    );
    assert_eq!(
        d.resolve("//cdn.example.net/a.css").as_deref(),
        Some("https://cdn.example.net/a.css")
    );
    assert_eq!(d.resolve("  "), None);
}

#[test]
fn test_extract_title_basic() {
    let stats = ProcessingStats::new();
    let d = doc("<html><head><title>\n  Test   Page \n</title></head></html>");
    assert_eq!(extract_title(&d, &stats), "Test Page");
    assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 0);
}

#[test]
fn test_extract_title_missing_counts_warning() {
    let stats = ProcessingStats::new();
    let d = doc("<html><head></head><body></body></html>");
    assert_eq!(extract_title(&d, &stats), "");
    assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
}

#[test]
fn test_extract_title_decodes_entities() {
    let stats = ProcessingStats::new();
    let d = doc("<title>Tom &amp; Jerry</title>");
    assert_eq!(extract_title(&d, &stats), "Tom & Jerry");
}

#[test]
fn test_extract_meta_description() {
    let stats = ProcessingStats::new();
    let d = doc(r#"<meta name="description" content="  A short description. ">"#);
    assert_eq!(extract_meta_description(&d, &stats), "A short description.");

    let missing = doc("<html></html>");
    assert_eq!(extract_meta_description(&missing, &stats), "");
    assert_eq!(stats.get_warning_count(WarningType::MissingMetaDescription), 1);
}

#[test]
fn test_extract_meta_keywords_and_robots() {
    let d = doc(
        r#"<meta name="keywords" content="rust, audit , ,seo">
           <meta name="robots" content="NoIndex, Follow">"#,
    );
    assert_eq!(extract_meta_keywords(&d), vec!["rust", "audit", "seo"]);
    assert_eq!(extract_robots(&d), vec!["noindex", "follow"]);
}

#[test]
fn test_extract_canonical_resolves() {
    let d = doc(r#"<link rel="canonical" href="/blog/post">"#);
    assert_eq!(
        extract_canonical(&d).as_deref(),
        Some("https://www.example.com/blog/post")
    );
}

#[test]
fn test_extract_charset_variants() {
    let d = doc(r#"<meta charset="utf-8">"#);
    assert_eq!(extract_charset(&d).as_deref(), Some("UTF-8"));

    let d = doc(r#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#);
    assert_eq!(extract_charset(&d).as_deref(), Some("WINDOWS-1251"));

    assert_eq!(extract_charset(&doc("<p>x</p>")), None);
}

#[test]
fn test_extract_lang_and_viewport() {
    let d = doc(
        r#"<html lang="uk"><head><meta name="viewport" content="width=device-width, initial-scale=1"></head></html>"#,
    );
    assert_eq!(extract_lang(&d).as_deref(), Some("uk"));
    assert_eq!(
        extract_viewport(&d).as_deref(),
        Some("width=device-width, initial-scale=1")
    );
}

#[test]
fn test_extract_generator() {
    let d = doc(r#"<meta name="generator" content="WordPress 6.4.2">"#);
    assert_eq!(extract_generator(&d).as_deref(), Some("WordPress 6.4.2"));
}

#[test]
fn test_structured_data_json_ld_types_and_graph() {
    let stats = ProcessingStats::new();
    let d = doc(
        r#"<script type="application/ld+json">{"@type": "Organization", "name": "X"}</script>
           <script type="application/ld+json">{"@graph": [{"@type": "WebPage"}, {"@type": ["Article", "Organization"]}]}</script>"#,
    );
    let data = extract_structured_data(&d, &stats);
    assert_eq!(data.json_ld.count, 2);
    assert_eq!(data.json_ld.types, vec!["Organization", "WebPage", "Article"]);
}

#[test]
fn test_structured_data_skips_malformed_block() {
    let stats = ProcessingStats::new();
    let d = doc(
        r#"<script type="application/ld+json">{"@type": "Broken",</script>
           <script type="application/ld+json">[{"@type": "Product"}]</script>"#,
    );
    let data = extract_structured_data(&d, &stats);
    assert_eq!(data.json_ld.count, 1);
    assert_eq!(data.json_ld.types, vec!["Product"]);
    assert_eq!(stats.get_warning_count(WarningType::JsonLdParseFailed), 1);
}

#[test]
fn test_structured_data_open_graph_and_twitter() {
    let stats = ProcessingStats::new();
    let d = doc(
        r#"<meta property="og:title" content="OG Title">
           <meta property="og:title" content="Second">
           <meta property="og:url" content="https://example.com/">
           <meta name="twitter:card" content="summary_large_image">"#,
    );
    let data = extract_structured_data(&d, &stats);
    assert_eq!(data.open_graph.get("og:title"), Some(&"OG Title".to_string()));
    assert_eq!(data.open_graph.len(), 2);
    assert_eq!(
        data.twitter_cards.get("twitter:card"),
        Some(&"summary_large_image".to_string())
    );
}

#[test]
fn test_structured_data_microdata() {
    let stats = ProcessingStats::new();
    let d = doc(
        r#"<div itemscope itemtype="https://schema.org/Product">
             <span itemprop="offers" itemscope itemtype="https://schema.org/Offer"></span>
           </div>
           <div itemscope itemtype="https://schema.org/Product"></div>"#,
    );
    let data = extract_structured_data(&d, &stats);
    assert_eq!(
        data.microdata,
        vec!["https://schema.org/Product", "https://schema.org/Offer"]
    );
}

#[test]
fn test_extract_social_media_links() {
    let d = doc(
        r#"<a href="https://www.facebook.com/wekey.tools">FB</a>
           <a href="https://www.facebook.com/sharer/sharer.php?u=x">Share</a>
           <a href="https://instagram.com/wekey_tools/">IG</a>
           <a href="https://t.me/wekey">TG</a>
           <a href="https://www.linkedin.com/company/wekey/">LI</a>
           <a href="https://instagram.com/wekey_tools/">IG again</a>
           <a href="/about">About</a>"#,
    );
    let links = extract_social_media_links(&d);
    let platforms: Vec<&str> = links.iter().map(|l| l.platform.as_str()).collect();
    assert_eq!(platforms, vec!["Facebook", "Instagram", "Telegram", "LinkedIn"]);
    assert_eq!(links[0].identifier.as_deref(), Some("wekey.tools"));
    assert_eq!(links[2].identifier.as_deref(), Some("wekey"));
}

#[test]
fn test_extract_social_media_links_twitter_and_x() {
    let d = doc(
        r#"<a href="https://twitter.com/wekey">T</a>
           <a href="https://x.com/intent/tweet?text=hi">Share</a>
           <a href="https://www.youtube.com/@wekey">YT</a>"#,
    );
    let links = extract_social_media_links(&d);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].platform, "Twitter");
    assert_eq!(links[1].platform, "YouTube");
    assert_eq!(links[1].identifier.as_deref(), Some("@wekey"));
}
