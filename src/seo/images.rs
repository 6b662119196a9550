//! Image alt-text audit.

use std::sync::LazyLock;

use scraper::Selector;

use super::types::ImageReport;
use crate::parse::Document;
use crate::utils::parse_selector_unsafe;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));

pub fn analyze_images(document: &Document) -> ImageReport {
    let mut report = ImageReport::default();
    for img in document.select(&IMG_SELECTOR) {
        report.total += 1;
        match img.value().attr("alt") {
            None => report.missing_alt += 1,
            Some(alt) if alt.trim().is_empty() => report.empty_alt += 1,
            Some(_) => report.with_alt += 1,
        }
    }
    report
}
