//! HTTP fetching of the audited page and its stylesheets.
//!
//! This module provides:
//! - URL normalization of user input
//! - A single-attempt page fetch with browser-like headers
//! - Sequential stylesheet fetching with per-file timeouts and partial results

mod request;
mod stylesheets;
mod types;

pub use request::{fetch_page, normalize_url};
pub use stylesheets::{fetch_stylesheets, is_font_service_url, FetchedStylesheet};
pub use types::FetchResult;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
