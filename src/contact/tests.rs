// Tests for phone and e-mail extraction.

use super::*;
use crate::parse::Document;

fn doc(html: &str) -> Document {
    Document::parse(html, "https://example.com/")
}

#[test]
fn test_tel_link_is_percent_decoded() {
    let document = doc(r#"<a href="tel:+1%20718%20734%200600">Call</a>"#);
    assert_eq!(extract_tel_links(&document), vec!["+17187340600"]);
}

#[test]
fn test_tel_links_deduplicated_and_length_checked() {
    let document = doc(
        r#"<a href="tel:+380 44 123 45 67">A</a>
           <a href="TEL:+380441234567">B</a>
           <a href="tel:123">too short</a>
           <a href="tel:5551234">local</a>"#,
    );
    assert_eq!(
        extract_tel_links(&document),
        vec!["+380441234567", "5551234"]
    );
}

#[test]
fn test_text_scan_skipped_when_tel_link_present() {
    let document = doc(
        r#"<p>Office: +44 20 7946 0958</p>
           <p>Support (212) 555-0199</p>
           <a href="tel:+15551234567">Call</a>"#,
    );
    let (phones, source) = extract_phone_numbers(&document);
    assert_eq!(phones, vec!["+15551234567"]);
    assert_eq!(source, Some(PhoneSource::TelLink));
}

#[test]
fn test_text_scan_fallback() {
    let document = doc(
        r#"<footer><p>Office: +44 20 7946 0958</p>
           <p>New York office</p><p>(212) 555-0199</p></footer>"#,
    );
    let (phones, source) = extract_phone_numbers(&document);
    assert_eq!(phones, vec!["+442079460958", "+12125550199"]);
    assert_eq!(source, Some(PhoneSource::TextScan));
}

#[test]
fn test_text_scan_rejects_code_context() {
    let html = r#"<div class="px-4" data-x="+12345678901">x</div>
        <script>function f(){ return "+380441234567"; }</script>"#;
    assert!(scan_html_for_phones(html).is_empty());
}

#[test]
fn test_text_scan_validates_lengths() {
    // +1 needs 11 digits, +380 needs 12.
    let html = "<p>Call +1 555 123 45</p>\
        <p>..................................................</p>\
        <p>Or +380 44 123 456</p>";
    assert!(scan_html_for_phones(html).is_empty());
}

#[test]
fn test_no_phones() {
    let (phones, source) = extract_phone_numbers(&doc("<p>No numbers here</p>"));
    assert!(phones.is_empty());
    assert!(source.is_none());
}

#[test]
fn test_validation_rules() {
    assert!(is_valid_us("2125550199"));
    assert!(!is_valid_us("1125550199"));
    assert!(!is_valid_us("0125550199"));
    assert!(!is_valid_us("212555019"));

    assert!(is_valid_international("+17187340600"));
    assert!(!is_valid_international("+1718734060"));
    assert!(is_valid_international("+380441234567"));
    assert!(!is_valid_international("+38044123456"));
    assert!(is_valid_international("+4915112345678"));
    assert!(!is_valid_international("+491511"));
}

#[test]
fn test_emails_from_mailto() {
    let document = doc(
        r#"<a href="mailto:Hello@Example.com?subject=Hi">Mail</a>
           <a href="mailto:sales%40example.com">Sales</a>
           <p>ignored@text.com</p>"#,
    );
    assert_eq!(
        extract_emails(&document),
        vec!["hello@example.com", "sales@example.com"]
    );
}

#[test]
fn test_emails_text_scan_rejects_assets() {
    let document = doc(
        r#"<img src="/img/logo@2x.png"><p>Write to info@example.org</p>"#,
    );
    assert_eq!(extract_emails(&document), vec!["info@example.org"]);
}

#[test]
fn test_extract_contacts_serialization() {
    let report = extract_contacts(&doc(r#"<a href="tel:+17187340600">Call</a>"#));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["phones"][0], "+17187340600");
    assert_eq!(json["phoneSource"], "tel-link");
    assert!(json["emails"].as_array().unwrap().is_empty());
}
