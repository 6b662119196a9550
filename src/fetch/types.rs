//! Fetch result data structures.

use std::collections::HashMap;

/// One fetched HTTP resource (the audited page or a linked stylesheet).
///
/// Created once per fetch and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL as requested (after normalization)
    pub url: String,
    /// URL after redirects
    pub final_url: String,
    /// HTTP status code of the final response
    pub http_status: u16,
    /// Response headers with lowercased names and lowercased values
    pub headers: HashMap<String, String>,
    /// Response headers with lowercased names and original values
    pub raw_headers: HashMap<String, String>,
    /// Response body decoded as text
    pub html: String,
    /// Wall time of request plus body read, in milliseconds
    pub load_time_ms: u64,
    /// Negotiated protocol, e.g. `HTTP/2`
    pub http_version: String,
}

impl FetchResult {
    /// Case-folded header value, or `None` if the header is absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Whether the final URL was served over HTTPS.
    pub fn is_https(&self) -> bool {
        self.final_url.starts_with("https://")
    }
}
