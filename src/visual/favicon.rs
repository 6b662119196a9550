//! Favicon resolution.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::parse::Document;
use crate::utils::parse_selector_unsafe;

/// `<link rel>` values tried in order; the first one present wins.
static FAVICON_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "icon",
        "shortcut icon",
        "apple-touch-icon",
        "apple-touch-icon-precomposed",
    ]
    .iter()
    .map(|rel| {
        parse_selector_unsafe(
            &format!(r#"link[rel="{rel}" i][href]"#),
            "FAVICON_SELECTORS",
        )
    })
    .collect()
});

/// Builds the fallback `/favicon.ico` URL from the page origin.
fn fallback_favicon_url(base: &Url) -> Option<String> {
    let host = base.host_str()?;
    Some(match base.port() {
        Some(port) => format!("{}://{}:{}/favicon.ico", base.scheme(), host, port),
        None => format!("{}://{}/favicon.ico", base.scheme(), host),
    })
}

/// Absolute favicon URL, falling back to `/favicon.ico` at the site root.
pub fn resolve_favicon(document: &Document) -> Option<String> {
    FAVICON_SELECTORS
        .iter()
        .find_map(|selector| document.first_attr(selector, "href"))
        .and_then(|href| document.resolve(&href))
        .or_else(|| document.base_url().and_then(fallback_favicon_url))
}
