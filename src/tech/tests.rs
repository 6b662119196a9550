// Technology detection tests.

use std::collections::HashMap;

use super::*;
use crate::config::HEADER_X_GENERATOR;
use crate::parse::Document;

fn doc(html: &str) -> Document {
    Document::parse(html, "https://example.com/")
}

fn no_headers() -> HashMap<String, String> {
    HashMap::new()
}

fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_wordpress_wins_over_joomla() {
    let d = doc(
        r#"<link rel="stylesheet" href="/wp-content/themes/x/style.css">
           <script src="/media/jui/js/jquery.min.js"></script>
           <meta name="generator" content="Joomla! - Open Source Content Management">"#,
    );
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.cms.as_deref(), Some("WordPress"));
}

#[test]
fn test_woocommerce_refines_wordpress() {
    let d = doc(
        r#"<link rel="stylesheet" href="/wp-content/plugins/woocommerce/assets/css/woocommerce.css">
           <script src="/media/jui/js/jquery.min.js"></script>"#,
    );
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.cms.as_deref(), Some("WooCommerce (WordPress)"));
    assert!(report.ecommerce.contains(&"WooCommerce".to_string()));
}

#[test]
fn test_woocommerce_without_wordpress_is_not_refined() {
    let d = doc(r#"<div class="woocommerce"></div><meta name="generator" content="Joomla! 4">"#);
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.cms.as_deref(), Some("Joomla"));
}

#[test]
fn test_no_cms_detected() {
    let d = doc("<html><body><p>Plain page</p></body></html>");
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.cms, None);
    assert_eq!(report.cms_version, None);
    assert_eq!(report.cloud_platform, None);
}

#[test]
fn test_cms_version_from_generator() {
    let d = doc(
        r#"<meta name="generator" content="WordPress 6.4.2"><link href="/wp-includes/css/x.css">"#,
    );
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.cms.as_deref(), Some("WordPress"));
    assert_eq!(report.cms_version.as_deref(), Some("6.4.2"));
}

#[test]
fn test_cms_version_from_html_comment() {
    let d = doc(
        r#"<!-- This site is optimized with Drupal 10.1 --><script type="application/json" data-drupal-selector="drupal-settings-json">{}</script>"#,
    );
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.cms.as_deref(), Some("Drupal"));
    assert_eq!(report.cms_version.as_deref(), Some("10.1"));
}

#[test]
fn test_cms_version_ignores_unrelated_generator() {
    assert_eq!(
        extract_cms_version("WordPress", Some("Elementor 3.18.0"), "<html></html>"),
        None
    );
}

#[test]
fn test_refined_cms_version_uses_platform_token() {
    assert_eq!(
        extract_cms_version("WooCommerce (WordPress)", Some("WordPress 6.5"), ""),
        Some("6.5".to_string())
    );
}

#[test]
fn test_multi_valued_categories_collect_all_matches() {
    let d = doc(
        r#"<div id="__next" data-reactroot=""></div>
           <script id="__NEXT_DATA__" type="application/json">{}</script>
           <script src="/_next/static/chunks/main.js"></script>
           <link href="https://cdn.jsdelivr.net/npm/bootstrap@5/dist/css/bootstrap.min.css" rel="stylesheet">
           <script src="https://code.jquery.com/jquery-3.7.1.min.js"></script>"#,
    );
    let report = detect_technologies(&d, &headers(&[("x-powered-by", "next.js")]));
    assert_eq!(report.framework, vec!["Next.js", "React"]);
    assert!(report.language.contains(&"Node.js".to_string()));
    assert_eq!(report.css_frameworks, vec!["Bootstrap"]);
    assert_eq!(report.js_libraries, vec!["jQuery"]);
}

#[test]
fn test_header_signals_and_absent_headers() {
    let d = doc("<html></html>");
    let report = detect_technologies(
        &d,
        &headers(&[
            ("x-powered-by", "php/8.2.1"),
            ("x-vercel-id", "fra1::abc"),
            ("server", "vercel"),
        ]),
    );
    assert!(report.language.contains(&"PHP".to_string()));
    assert_eq!(report.cloud_platform.as_deref(), Some("Vercel"));

    let bare = detect_technologies(&d, &no_headers());
    assert!(bare.language.is_empty());
    assert_eq!(bare.cloud_platform, None);
}

#[test]
fn test_cloud_platform_first_match_wins() {
    let d = doc("<html></html>");
    let report = detect_technologies(
        &d,
        &headers(&[("x-amz-cf-id", "abc"), ("x-nf-request-id", "xyz")]),
    );
    assert_eq!(report.cloud_platform.as_deref(), Some("Netlify"));
}

#[test]
fn test_static_generator_from_generator_meta() {
    let d = doc(r#"<meta name="generator" content="Hugo 0.120.4">"#);
    let report = detect_technologies(&d, &no_headers());
    assert_eq!(report.static_generators, vec!["Hugo"]);
}

#[test]
fn test_rule_table_names_are_unique_per_category() {
    let mut seen = std::collections::HashSet::new();
    for rule in TECH_RULES {
        assert!(
            seen.insert((rule.category, rule.name)),
            "duplicate rule {:?}/{}",
            rule.category,
            rule.name
        );
    }
}

#[test]
fn test_report_serializes_camel_case() {
    let report = TechnologyReport {
        cms: Some("WordPress".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["cms"], "WordPress");
    assert!(json["cmsVersion"].is_null());
    assert!(json["cssFrameworks"].as_array().unwrap().is_empty());
}

#[test]
fn test_x_generator_header_names_cms() {
    let d = doc("<html><body></body></html>");
    let report = detect_technologies(&d, &headers(&[(HEADER_X_GENERATOR, "drupal 10 (https://www.drupal.org)")]));
    assert_eq!(report.cms.as_deref(), Some("Drupal"));
}
