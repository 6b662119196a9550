//! Title keyword density.

use regex::Regex;

use super::types::{DensityStatus, KeywordAnalysis, KeywordDensity};
use crate::config::MAX_TITLE_KEYWORDS;
use crate::utils::round_to;

const UNDERUSED_BELOW: f64 = 0.5;
const SPAMMY_ABOVE: f64 = 3.0;

/// Up to three distinct lowercased title words longer than three characters.
pub fn title_keywords(title: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in title.split_whitespace() {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.chars().count() > 3 && !keywords.contains(&word) {
            keywords.push(word);
            if keywords.len() == MAX_TITLE_KEYWORDS {
                break;
            }
        }
    }
    keywords
}

pub fn density_status(density: f64) -> DensityStatus {
    if density < UNDERUSED_BELOW {
        DensityStatus::Underused
    } else if density > SPAMMY_ABOVE {
        DensityStatus::PotentiallySpammy
    } else {
        DensityStatus::Optimal
    }
}

/// Case-insensitive whole-word occurrences of `keyword` in `text`.
fn count_occurrences(keyword: &str, text: &str) -> usize {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            log::warn!("Keyword pattern for '{}' rejected: {}", keyword, e);
            0
        }
    }
}

/// Density of each title keyword in the body text.
///
/// `density = occurrences / total_words × 100`, rounded to two decimals.
pub fn analyze_keywords(title: &str, body_text: &str) -> KeywordAnalysis {
    let total_words = body_text.split_whitespace().count();
    let keywords = title_keywords(title)
        .into_iter()
        .map(|keyword| {
            let occurrences = count_occurrences(&keyword, body_text);
            let density = if total_words == 0 {
                0.0
            } else {
                round_to(occurrences as f64 / total_words as f64 * 100.0, 2)
            };
            KeywordDensity {
                status: density_status(density),
                keyword,
                occurrences,
                density,
            }
        })
        .collect();

    KeywordAnalysis {
        total_words,
        keywords,
    }
}
