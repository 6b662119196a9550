//! Rule-table evaluation.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::Selector;
use serde::Serialize;

use super::rules::{Category, Signal, REFINEMENTS, TECH_RULES};
use crate::parse::{extract_generator, Document};
use crate::utils::{compile_regex_unsafe, parse_selector_with_fallback};

/// Selectors used by the rule table, parsed once.
static RULE_SELECTORS: LazyLock<HashMap<&'static str, Selector>> = LazyLock::new(|| {
    TECH_RULES
        .iter()
        .flat_map(|rule| rule.signals.iter())
        .chain(REFINEMENTS.iter().flat_map(|r| r.signals.iter()))
        .filter_map(|signal| match signal {
            Signal::Selector(s) => Some(*s),
            _ => None,
        })
        .map(|s| (s, parse_selector_with_fallback(s, "technology rule")))
        .collect()
});

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(\d+(?:\.\d+)+)", "VERSION_RE"));
static HTML_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?s)<!--(.*?)-->", "HTML_COMMENT_RE"));

/// Detected technology stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyReport {
    pub cms: Option<String>,
    pub cms_version: Option<String>,
    pub framework: Vec<String>,
    pub language: Vec<String>,
    pub database: Vec<String>,
    pub cloud_platform: Option<String>,
    pub css_frameworks: Vec<String>,
    pub preprocessors: Vec<String>,
    pub static_generators: Vec<String>,
    pub build_tools: Vec<String>,
    pub micro_frameworks: Vec<String>,
    pub ecommerce: Vec<String>,
    pub js_libraries: Vec<String>,
}

impl TechnologyReport {
    fn single_mut(&mut self, category: Category) -> Option<&mut Option<String>> {
        match category {
            Category::Cms => Some(&mut self.cms),
            Category::CloudPlatform => Some(&mut self.cloud_platform),
            _ => None,
        }
    }

    fn list_mut(&mut self, category: Category) -> Option<&mut Vec<String>> {
        match category {
            Category::Framework => Some(&mut self.framework),
            Category::Language => Some(&mut self.language),
            Category::Database => Some(&mut self.database),
            Category::CssFramework => Some(&mut self.css_frameworks),
            Category::Preprocessor => Some(&mut self.preprocessors),
            Category::StaticGenerator => Some(&mut self.static_generators),
            Category::BuildTool => Some(&mut self.build_tools),
            Category::MicroFramework => Some(&mut self.micro_frameworks),
            Category::Ecommerce => Some(&mut self.ecommerce),
            Category::JsLibrary => Some(&mut self.js_libraries),
            Category::Cms | Category::CloudPlatform => None,
        }
    }
}

/// Inputs every signal is evaluated against.
pub struct SignalContext<'a> {
    document: &'a Document,
    headers: &'a HashMap<String, String>,
    generator: Option<String>,
}

impl<'a> SignalContext<'a> {
    /// `headers` must use lowercased names and values.
    pub fn new(document: &'a Document, headers: &'a HashMap<String, String>) -> Self {
        Self {
            document,
            headers,
            generator: extract_generator(document),
        }
    }

    pub fn matches(&self, signal: &Signal) -> bool {
        match signal {
            Signal::Html(needle) => self.document.html_lower().contains(needle),
            Signal::Selector(selector) => match RULE_SELECTORS.get(selector) {
                Some(parsed) => self.document.exists(parsed),
                None => self
                    .document
                    .exists(&parse_selector_with_fallback(selector, "signal")),
            },
            Signal::Header(name, needle) => self
                .headers
                .get(*name)
                .is_some_and(|value| value.contains(needle)),
            Signal::HeaderPresent(name) => self.headers.contains_key(*name),
            Signal::Generator(needle) => self
                .generator
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(needle)),
        }
    }

    /// Whether any of `signals` matches.
    pub fn any(&self, signals: &[Signal]) -> bool {
        signals.iter().any(|s| self.matches(s))
    }
}

/// Runs the technology rule table over a document and its response headers.
///
/// `headers` must use lowercased names and values; absent headers never match.
pub fn detect_technologies(
    document: &Document,
    headers: &HashMap<String, String>,
) -> TechnologyReport {
    let ctx = SignalContext::new(document, headers);

    let mut report = TechnologyReport::default();
    let mut seen: HashSet<(Category, &'static str)> = HashSet::new();

    for rule in TECH_RULES {
        if rule.category.is_exclusive() {
            let already_decided = report
                .single_mut(rule.category)
                .map(|slot| slot.is_some())
                .unwrap_or(true);
            if already_decided {
                continue;
            }
            if ctx.any(rule.signals) {
                debug!("{:?} matched: {}", rule.category, rule.name);
                if let Some(slot) = report.single_mut(rule.category) {
                    *slot = Some(rule.name.to_string());
                }
            }
        } else if !seen.contains(&(rule.category, rule.name)) && ctx.any(rule.signals) {
            seen.insert((rule.category, rule.name));
            if let Some(list) = report.list_mut(rule.category) {
                list.push(rule.name.to_string());
            }
        }
    }

    for refinement in REFINEMENTS {
        let Some(slot) = report.single_mut(refinement.category) else {
            continue;
        };
        if slot.as_deref() == Some(refinement.when) && ctx.any(refinement.signals) {
            debug!("{} refined to {}", refinement.when, refinement.becomes);
            *slot = Some(refinement.becomes.to_string());
        }
    }

    report.cms_version = report
        .cms
        .as_deref()
        .and_then(|cms| extract_cms_version(cms, ctx.generator.as_deref(), document.html()));

    report
}

/// Lowercase name used to look the CMS up in version strings.
///
/// A refined name such as `"WooCommerce (WordPress)"` is versioned by its platform.
fn version_token(cms: &str) -> String {
    cms.split_once(" (")
        .map(|(_, platform)| platform.trim_end_matches(')'))
        .unwrap_or(cms)
        .to_lowercase()
}

/// Version from the generator meta (when it names the CMS), then from HTML
/// comments mentioning the CMS.
pub fn extract_cms_version(cms: &str, generator: Option<&str>, html: &str) -> Option<String> {
    let token = version_token(cms);

    if let Some(generator) = generator {
        if generator.to_lowercase().contains(&token) {
            if let Some(cap) = VERSION_RE.captures(generator) {
                return Some(cap[1].to_string());
            }
        }
    }

    HTML_COMMENT_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|comment| comment.to_lowercase().contains(&token))
        .find_map(|comment| VERSION_RE.captures(comment).map(|c| c[1].to_string()))
}
