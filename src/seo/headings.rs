//! Heading census and hierarchy validation.

use std::sync::LazyLock;

use scraper::Selector;

use super::types::{HeadingLevel, HeadingReport};
use crate::config::MAX_HEADING_SAMPLES;
use crate::parse::{element_text, Document};
use crate::utils::parse_selector_unsafe;

static HEADING_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    [
        parse_selector_unsafe("h1", "HEADING_SELECTORS"),
        parse_selector_unsafe("h2", "HEADING_SELECTORS"),
        parse_selector_unsafe("h3", "HEADING_SELECTORS"),
        parse_selector_unsafe("h4", "HEADING_SELECTORS"),
        parse_selector_unsafe("h5", "HEADING_SELECTORS"),
        parse_selector_unsafe("h6", "HEADING_SELECTORS"),
    ]
});

fn census(document: &Document, level: usize) -> HeadingLevel {
    let texts: Vec<String> = document
        .select(&HEADING_SELECTORS[level - 1])
        .map(|el| element_text(&el))
        .collect();

    let empty = texts.iter().filter(|t| t.is_empty()).count();
    let mut issues = Vec::new();
    if level == 1 {
        match texts.len() {
            0 => issues.push("Missing H1 heading".to_string()),
            1 => {}
            n => issues.push(format!("Multiple H1 headings ({n})")),
        }
    }
    if empty > 0 {
        issues.push(format!("{empty} empty H{level} heading(s)"));
    }

    HeadingLevel {
        count: texts.len(),
        samples: texts
            .into_iter()
            .filter(|t| !t.is_empty())
            .take(MAX_HEADING_SAMPLES)
            .collect(),
        issues,
    }
}

/// Reports skipped levels between consecutive used heading levels.
///
/// `counts[i]` is the number of `h{i+1}` elements. A first used level is never a
/// skip, so a page whose only headings are H3 has no issue.
pub fn hierarchy_issues(counts: &[usize; 6]) -> Vec<String> {
    let used: Vec<usize> = (1..=6).filter(|level| counts[level - 1] > 0).collect();
    used.windows(2)
        .filter(|pair| pair[1] - pair[0] > 1)
        .map(|pair| format!("H{} used without H{}", pair[1], pair[0] + 1))
        .collect()
}

/// Counts H1–H6, samples their texts and validates the hierarchy.
pub fn analyze_headings(document: &Document) -> HeadingReport {
    let [h1, h2, h3, h4, h5, h6] = [1, 2, 3, 4, 5, 6].map(|level| census(document, level));
    let counts = [h1.count, h2.count, h3.count, h4.count, h5.count, h6.count];

    HeadingReport {
        total: counts.iter().sum(),
        hierarchy_issues: hierarchy_issues(&counts),
        h1,
        h2,
        h3,
        h4,
        h5,
        h6,
    }
}
