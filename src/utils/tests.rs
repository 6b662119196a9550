// Utils module tests.

use super::*;

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  Hello \n\t world  "), "Hello world");
    assert_eq!(collapse_whitespace(""), "");
}

#[test]
fn test_round_to_two_decimals() {
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert_eq!(round_to(12.3456, 2), 12.35);
    assert_eq!(round_to(3.0, 2), 3.0);
}

#[test]
fn test_parse_selector_with_fallback_invalid() {
    let selector = parse_selector_with_fallback("[[[invalid", "test");
    let document = scraper::Html::parse_document("<p>text</p>");
    assert_eq!(document.select(&selector).count(), 0);
}

#[test]
#[should_panic(expected = "programming error")]
fn test_compile_regex_unsafe_panics_on_invalid_pattern() {
    compile_regex_unsafe("(unclosed", "test");
}
