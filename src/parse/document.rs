//! The parsed document shared by every evaluator.

use std::sync::LazyLock;

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::utils::{collapse_whitespace, parse_selector_unsafe};

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("body", "BODY_SELECTOR"));

/// Elements whose text never counts as visible page content.
const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A read-only, queryable view over fetched HTML.
///
/// Parsing is delegated to html5ever through `scraper`, which recovers from any
/// malformed markup, so construction never fails. `Html` is not `Send`; keep a
/// `Document` out of scope across `.await` points.
pub struct Document {
    dom: Html,
    html: String,
    html_lower: String,
    base_url: Option<Url>,
}

impl Document {
    /// Parses `html`, resolving relative links against `base_url`.
    pub fn parse(html: &str, base_url: &str) -> Self {
        let parsed_base = Url::parse(base_url).ok();
        if parsed_base.is_none() {
            log::debug!(
                "Base URL '{}' is not absolute; links stay unresolved",
                base_url
            );
        }
        Self {
            dom: Html::parse_document(html),
            html: html.to_string(),
            html_lower: html.to_lowercase(),
            base_url: parsed_base,
        }
    }

    /// The underlying DOM.
    pub fn dom(&self) -> &Html {
        &self.dom
    }

    /// The original HTML string.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The HTML string, lowercased once for substring signatures.
    pub fn html_lower(&self) -> &str {
        &self.html_lower
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Elements matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.dom.select(selector)
    }

    /// Whether any element matches `selector`.
    pub fn exists(&self, selector: &Selector) -> bool {
        self.dom.select(selector).next().is_some()
    }

    /// The `attr` value of the first element matching `selector`, trimmed.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.dom
            .select(selector)
            .find_map(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
    }

    /// All non-empty `attr` values of elements matching `selector`, in document order.
    pub fn attr_values(&self, selector: &Selector, attr: &str) -> Vec<String> {
        self.dom
            .select(selector)
            .filter_map(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Whitespace-normalized visible text of `<body>`.
    ///
    /// Text inside `<script>`, `<style>`, `<noscript>` and `<template>` is skipped.
    /// Falls back to the whole document when there is no `<body>`.
    pub fn body_text(&self) -> String {
        let root = self
            .dom
            .select(&BODY_SELECTOR)
            .next()
            .unwrap_or_else(|| self.dom.root_element());

        let mut parts: Vec<&str> = Vec::new();
        for node in root.descendants() {
            if let Node::Text(text) = node.value() {
                let hidden = node.ancestors().any(|ancestor| {
                    matches!(ancestor.value(), Node::Element(el) if NON_CONTENT_ELEMENTS.contains(&el.name()))
                });
                if !hidden {
                    parts.push(&**text);
                }
            }
        }
        collapse_whitespace(&parts.join(" "))
    }

    /// Resolves `href` against the page URL. Returns `None` if it cannot be resolved.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        match &self.base_url {
            Some(base) => base.join(href).ok().map(|u| u.to_string()),
            None => Url::parse(href).ok().map(|u| u.to_string()),
        }
    }

    /// Host of the page URL, if any.
    pub fn host(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .and_then(|u| u.host_str())
            .map(str::to_lowercase)
    }
}

/// Whitespace-normalized text content of an element.
pub fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}
