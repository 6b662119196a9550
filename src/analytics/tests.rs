// Analytics module tests.

use super::*;

#[test]
fn test_detect_marketing_tags_independent_checks() {
    let html = r#"<script async src="https://www.googletagmanager.com/gtm.js?id=GTM-ABC1234"></script>
        <script src="https://static.hotjar.com/c/hotjar-1.js"></script>
        <script src="//code.jivosite.com/widget/abc"></script>"#
        .to_lowercase();
    let tags = detect_marketing_tags(&html);

    assert!(tags.is_set("googleTagManager"));
    assert!(tags.is_set("hotjar"));
    assert!(tags.is_set("jivoChat"));
    assert!(!tags.is_set("metaPixel"));
    assert!(!tags.is_set("googleAnalytics"));
    assert_eq!(tags.set_keys(), vec!["googleTagManager", "hotjar", "jivoChat"]);
}

#[test]
fn test_detect_marketing_tags_reports_every_tag() {
    let tags = detect_marketing_tags("<html></html>");
    assert_eq!(tags.len(), 28);
    assert!(tags.set_keys().is_empty());
}

#[test]
fn test_tag_presence_serializes_in_rule_order() {
    let tags = detect_marketing_tags("fbq('init', '123')");
    let json = serde_json::to_string(&tags).unwrap();
    assert!(json.starts_with(r#"{"googleAnalytics":false,"googleAnalytics4":false"#));
    assert!(json.contains(r#""metaPixel":true"#));
}

#[test]
fn test_extract_tracking_ids_google() {
    let html = r#"
        <script>ga('create', 'UA-12345-1', 'auto');</script>
        <script async src="https://www.googletagmanager.com/gtag/js?id=G-ABCDEF1234"></script>
        <script>gtag('config', 'G-ABCDEF1234'); gtag('config', 'AW-987654321');</script>
        <noscript><iframe src="https://www.googletagmanager.com/ns.html?id=GTM-XYZ9876"></iframe></noscript>
    "#;
    let ids = extract_tracking_ids(html);
    let pairs: Vec<(&str, &str)> = ids
        .iter()
        .map(|t| (t.provider.as_str(), t.id.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Google Analytics", "UA-12345-1"),
            ("Google Analytics 4", "G-ABCDEF1234"),
            ("Google Ads", "AW-987654321"),
            ("Google Tag Manager", "GTM-XYZ9876"),
        ]
    );
}

#[test]
fn test_extract_tracking_ids_pixel_adsense_yandex() {
    let html = r#"
        <script>fbq('init', '1234567890');</script>
        <script data-ad-client="ca-pub-1234567890123456"></script>
        <script>ym(87654321, "init", {clickmap:true});</script>
        <noscript><img src="https://mc.yandex.ru/watch/87654321"></noscript>
    "#;
    let ids = extract_tracking_ids(html);
    assert!(ids.contains(&TrackingId {
        provider: "Meta Pixel".to_string(),
        id: "1234567890".to_string()
    }));
    assert!(ids.contains(&TrackingId {
        provider: "Google AdSense".to_string(),
        id: "pub-1234567890123456".to_string()
    }));
    let yandex: Vec<_> = ids
        .iter()
        .filter(|t| t.provider == "Yandex Metrica")
        .collect();
    assert_eq!(yandex.len(), 1);
    assert_eq!(yandex[0].id, "87654321");
}

#[test]
fn test_extract_tracking_ids_ignores_short_publisher_ids() {
    assert!(extract_tracking_ids("pub-1 and pub-12345").is_empty());
}
