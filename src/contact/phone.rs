//! Phone number extraction.
//!
//! Tier 1 reads `tel:` links. Tier 2 scans the raw HTML and only runs when
//! Tier 1 found nothing.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use scraper::Selector;

use crate::parse::Document;
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

static TEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"a[href^="tel:" i]"#, "TEL_SELECTOR"));

static INTERNATIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"\+\d[\d\s().\-]{6,20}\d", "INTERNATIONAL_RE")
});
static US_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\(\d{3}\)\s?\d{3}[\s.\-]\d{4}", "US_RE"));

/// Accepted digit count for `tel:` links.
const TEL_DIGITS: (usize, usize) = (7, 15);

/// Characters inspected on each side of a scanned match.
const CONTEXT_WINDOW: usize = 50;

/// Context markers that reveal a match sits in markup, code or a utility class
/// rather than in visible text.
const CONTEXT_REJECT_MARKERS: &[&str] = &[
    "class=", "id=", "function", "px-", "py-", "mx-", "my-", "mt-", "mb-", "pt-", "pb-", "col-",
    "grid-", "flex-", "text-", "bg-", "translate", "rotate", "matrix",
];

/// Which tier produced the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneSource {
    TelLink,
    TextScan,
}

/// Digits of `raw`, with a `+` prefix when `raw` starts with one.
fn digits_with_plus(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if trimmed.starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

fn digit_count(number: &str) -> usize {
    number.chars().filter(char::is_ascii_digit).count()
}

/// Tier 1: numbers from `tel:` hrefs, percent-decoded.
pub fn extract_tel_links(document: &Document) -> Vec<String> {
    let mut phones: Vec<String> = Vec::new();
    for link in document.select(&TEL_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let raw = href.trim().get(4..).unwrap_or_default();
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        let number = digits_with_plus(&decoded);
        let count = digit_count(&number);
        if (TEL_DIGITS.0..=TEL_DIGITS.1).contains(&count) && !phones.contains(&number) {
            phones.push(number);
        }
    }
    phones
}

/// Text around `start..end`, at most `CONTEXT_WINDOW` bytes each side, lowercased.
fn context_window(html: &str, start: usize, end: usize) -> String {
    let mut from = start.saturating_sub(CONTEXT_WINDOW);
    while !html.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + CONTEXT_WINDOW).min(html.len());
    while !html.is_char_boundary(to) {
        to += 1;
    }
    html[from..to].to_lowercase()
}

fn in_code_context(html: &str, start: usize, end: usize) -> bool {
    let window = context_window(html, start, end);
    CONTEXT_REJECT_MARKERS.iter().any(|m| window.contains(m))
}

/// `+1` needs 11 digits, `+380` needs 12, any other code 10 to 13.
pub fn is_valid_international(number: &str) -> bool {
    let count = digit_count(number);
    if number.starts_with("+380") {
        count == 12
    } else if number.starts_with("+1") {
        count == 11
    } else {
        (10..=13).contains(&count)
    }
}

/// Ten digits, area code not starting with 0 or 1.
pub fn is_valid_us(digits: &str) -> bool {
    digits.len() == 10 && !digits.starts_with(['0', '1'])
}

/// Tier 2: international and US `(xxx) xxx-xxxx` numbers in the raw HTML.
pub fn scan_html_for_phones(html: &str) -> Vec<String> {
    let mut phones: Vec<String> = Vec::new();

    for m in INTERNATIONAL_RE.find_iter(html) {
        if in_code_context(html, m.start(), m.end()) {
            continue;
        }
        let number = digits_with_plus(m.as_str());
        if is_valid_international(&number) && !phones.contains(&number) {
            phones.push(number);
        }
    }

    for m in US_RE.find_iter(html) {
        if in_code_context(html, m.start(), m.end()) {
            continue;
        }
        let digits = digits_with_plus(m.as_str());
        if is_valid_us(&digits) {
            let number = format!("+1{digits}");
            if !phones.contains(&number) {
                phones.push(number);
            }
        }
    }

    phones
}

/// Phone numbers by priority tier.
///
/// The HTML scan is skipped entirely when at least one `tel:` link yields a number.
pub fn extract_phone_numbers(document: &Document) -> (Vec<String>, Option<PhoneSource>) {
    let tel = extract_tel_links(document);
    if !tel.is_empty() {
        return (tel, Some(PhoneSource::TelLink));
    }
    let scanned = scan_html_for_phones(document.html());
    if scanned.is_empty() {
        (scanned, None)
    } else {
        (scanned, Some(PhoneSource::TextScan))
    }
}
