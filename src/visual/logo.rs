//! Logo detection.
//!
//! Dedicated logo containers are checked first and win outright. Otherwise
//! every `<img>` is scored by a weighted sum of signals and the best candidate
//! above `LOGO_MIN_SCORE` wins.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use serde::Serialize;

use crate::config::LOGO_MIN_SCORE;
use crate::parse::Document;
use crate::utils::{class_and_id, compile_regex_unsafe, parse_selector_unsafe};

/// Containers that hold the site logo by convention, in priority order.
const LOGO_CONTAINERS: &[&str] = &[
    "#logo",
    ".logo",
    ".site-logo",
    ".header-logo",
    ".custom-logo-link",
    ".navbar-brand",
    ".brand",
    ".logo-wrapper",
];

const CONTAINER_IMG_SCORE: i32 = 100;
const CONTAINER_BACKGROUND_SCORE: i32 = 95;

/// How many ancestors are inspected for container hints.
const PARENT_DEPTH: usize = 3;

static CONTAINER_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    LOGO_CONTAINERS
        .iter()
        .map(|s| (*s, parse_selector_unsafe(s, "CONTAINER_SELECTORS")))
        .collect()
});
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));
static STYLED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[style]", "STYLED_SELECTOR"));
static BACKGROUND_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)background(?:-image)?\s*:[^;]*url\(\s*['"]?([^'")]+)['"]?\s*\)"#,
        "BACKGROUND_URL_RE",
    )
});

/// A scored candidate for a single-answer question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScore {
    pub candidate_value: String,
    pub score: i32,
    /// Which signal set produced the score
    pub source: String,
}

fn img_src<'a>(img: &ElementRef<'a>) -> Option<&'a str> {
    let value = img.value();
    ["src", "data-src", "data-lazy-src"]
        .iter()
        .filter_map(|attr| value.attr(attr))
        .map(str::trim)
        .find(|src| !src.is_empty() && !src.starts_with("data:"))
}

fn background_url(element: &ElementRef<'_>) -> Option<String> {
    let style = element.value().attr("style")?;
    BACKGROUND_URL_RE
        .captures(style)
        .map(|cap| cap[1].trim().to_string())
}

/// Logo found in a dedicated container: a contained image, or a CSS
/// `background-image` on the container or inside it.
fn container_logo(document: &Document) -> Option<SignalScore> {
    for (name, selector) in CONTAINER_SELECTORS.iter() {
        for container in document.select(selector) {
            let img = if container.value().name() == "img" {
                Some(container)
            } else {
                container.select(&IMG_SELECTOR).next()
            };
            if let Some(url) = img.and_then(|img| img_src(&img)).and_then(|src| document.resolve(src)) {
                return Some(SignalScore {
                    candidate_value: url,
                    score: CONTAINER_IMG_SCORE,
                    source: format!("container {name} img"),
                });
            }

            let background = background_url(&container).or_else(|| {
                container
                    .select(&STYLED_SELECTOR)
                    .find_map(|el| background_url(&el))
            });
            if let Some(url) = background.and_then(|bg| document.resolve(&bg)) {
                return Some(SignalScore {
                    candidate_value: url,
                    score: CONTAINER_BACKGROUND_SCORE,
                    source: format!("container {name} background-image"),
                });
            }
        }
    }
    None
}

fn parse_dimension(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .ok()
        .filter(|v| *v > 0.0)
}

fn in_header<'a>(img: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    img.ancestors().filter_map(ElementRef::wrap).find(|el| {
        matches!(el.value().name(), "header" | "nav") || class_and_id(el).contains("header")
    })
}

/// Weighted signal sum for one `<img>`.
pub fn score_image(img: &ElementRef<'_>) -> i32 {
    let value = img.value();
    let alt = value.attr("alt").unwrap_or_default().to_lowercase();
    let class = value.attr("class").unwrap_or_default().to_lowercase();
    let id = value.attr("id").unwrap_or_default().to_lowercase();
    let src = img_src(img).unwrap_or_default().to_lowercase();
    let parents: String = img
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take(PARENT_DEPTH)
        .map(|el| class_and_id(&el))
        .collect::<Vec<_>>()
        .join(" ");

    let mut score = 0;

    if alt.contains("logo") {
        score += 40;
    }
    if class.contains("logo") {
        score += 50;
    }
    if id.contains("logo") {
        score += 50;
    }
    if src.contains("logo") {
        score += 30;
    }
    if parents.contains("logo") {
        score += 25;
    }

    if alt.contains("brand") || class.contains("brand") || id.contains("brand") {
        score += 20;
    } else if src.contains("brand") || parents.contains("brand") {
        score += 15;
    }

    if let Some(header) = in_header(img) {
        score += 15;
        let first_img = header.select(&IMG_SELECTOR).next();
        if first_img.is_some_and(|first| first == *img) {
            score += 10;
        }
    }

    let width = parse_dimension(value.attr("width"));
    let height = parse_dimension(value.attr("height"));
    if let (Some(w), Some(h)) = (width, height) {
        if (0.5..=4.0).contains(&(w / h)) {
            score += 5;
        }
        if (50.0..=400.0).contains(&w) && (20.0..=200.0).contains(&h) {
            score += 5;
        }
    }

    let context = format!("{alt} {class} {id} {src} {parents}");
    if context.contains("product") {
        score -= 30;
    }
    if context.contains("card") {
        score -= 20;
    }
    if context.contains("item") {
        score -= 15;
    }
    if context.contains("avatar") {
        score -= 20;
    }
    if context.contains("profile") {
        score -= 15;
    }
    if context.contains("icon") && !context.contains("logo") {
        score -= 5;
    }

    score
}

/// Scores every `<img>` in document order.
pub fn score_images(document: &Document) -> Vec<SignalScore> {
    document
        .select(&IMG_SELECTOR)
        .filter_map(|img| {
            let url = document.resolve(img_src(&img)?)?;
            Some(SignalScore {
                candidate_value: url,
                score: score_image(&img),
                source: "img".to_string(),
            })
        })
        .collect()
}

/// The site logo, if any candidate is convincing enough.
///
/// Ties keep document order.
pub fn detect_logo(document: &Document) -> Option<SignalScore> {
    if let Some(logo) = container_logo(document) {
        log::debug!("Logo from {}: {}", logo.source, logo.candidate_value);
        return Some(logo);
    }

    let mut candidates: Vec<SignalScore> = score_images(document)
        .into_iter()
        .filter(|c| c.score > LOGO_MIN_SCORE)
        .collect();
    candidates.sort_by_key(|c| std::cmp::Reverse(c.score));
    candidates.into_iter().next()
}
