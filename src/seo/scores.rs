//! 0–100 sub-scores.

use super::types::{ImageReport, SeoScores};
use crate::config::{CONTENT_WORDS_TARGET, DESCRIPTION_OPTIMAL_RANGE, TITLE_OPTIMAL_RANGE};

fn ratio_score(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round().min(100.0) as u32
}

/// 100 inside `range`; proportional to the length below it; proportional to the
/// overshoot above it. Empty text scores 0.
pub fn length_score(length: usize, range: (usize, usize)) -> u32 {
    let (min, max) = range;
    if length == 0 {
        0
    } else if length < min {
        ratio_score(length, min)
    } else if length > max {
        ratio_score(max, length)
    } else {
        100
    }
}

/// Exactly one H1 scores 100, several 50, none 0.
pub fn h1_score(h1_count: usize) -> u32 {
    match h1_count {
        0 => 0,
        1 => 100,
        _ => 50,
    }
}

/// 100 at the word target and above, linear below it.
pub fn content_score(words: usize) -> u32 {
    if words >= CONTENT_WORDS_TARGET {
        100
    } else {
        ratio_score(words, CONTENT_WORDS_TARGET)
    }
}

/// Share of images with a non-empty `alt`. A page without images scores 100.
pub fn image_alt_score(images: &ImageReport) -> u32 {
    if images.total == 0 {
        100
    } else {
        ratio_score(images.with_alt, images.total)
    }
}

pub fn compute_scores(
    title_length: usize,
    description_length: usize,
    h1_count: usize,
    words: usize,
    images: &ImageReport,
) -> SeoScores {
    let title = length_score(title_length, TITLE_OPTIMAL_RANGE);
    let description = length_score(description_length, DESCRIPTION_OPTIMAL_RANGE);
    let h1 = h1_score(h1_count);
    let content = content_score(words);
    let images = image_alt_score(images);
    let overall = ((title + description + h1 + content + images) as f64 / 5.0).round() as u32;

    SeoScores {
        title,
        description,
        h1,
        content,
        images,
        overall,
    }
}
