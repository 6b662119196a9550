//! URL normalization, request building and the single-attempt page fetch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use super::types::FetchResult;
use crate::error_handling::{categorize_reqwest_error, categorize_status, AuditError};

/// Browser-like request headers.
///
/// Sites that sniff for bots often serve a stripped page to unknown clients, which
/// would starve the technology and visual detectors. `Accept-Encoding` is left to
/// reqwest so that bodies are decoded transparently.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9,uk;q=0.8")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
    }
}

/// Normalizes user input into an absolute URL.
///
/// Prepends `https://` when the input carries no `http://`/`https://` scheme.
///
/// # Errors
///
/// Returns `AuditError::InvalidInput` when the input is empty or does not form a
/// URL with a host.
pub fn normalize_url(input: &str) -> Result<String, AuditError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AuditError::InvalidInput("URL is required".to_string()));
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = url::Url::parse(&candidate)
        .map_err(|e| AuditError::InvalidInput(format!("Invalid URL '{}': {}", trimmed, e)))?;
    if parsed.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(AuditError::InvalidInput(format!(
            "Invalid URL '{}': missing host",
            trimmed
        )));
    }
    Ok(parsed.to_string())
}

/// Maps a protocol version to its display form.
pub(crate) fn format_version(version: reqwest::Version) -> String {
    match version {
        reqwest::Version::HTTP_09 => "HTTP/0.9",
        reqwest::Version::HTTP_10 => "HTTP/1.0",
        reqwest::Version::HTTP_11 => "HTTP/1.1",
        reqwest::Version::HTTP_2 => "HTTP/2",
        reqwest::Version::HTTP_3 => "HTTP/3",
        _ => "unknown",
    }
    .to_string()
}

/// Collects response headers into (case-folded, original-value) maps.
///
/// Repeated headers are joined with `", "`.
pub(crate) fn collect_headers(
    headers: &reqwest::header::HeaderMap,
) -> (HashMap<String, String>, HashMap<String, String>) {
    let mut folded: HashMap<String, String> = HashMap::new();
    let mut raw: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = String::from_utf8_lossy(value.as_bytes()).to_string();
        raw.entry(key.clone())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.clone());
        let lowered = value.to_lowercase();
        folded
            .entry(key)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&lowered);
            })
            .or_insert(lowered);
    }
    (folded, raw)
}

/// Cuts `body` to at most `max_bytes`, respecting UTF-8 boundaries.
fn truncate_body(mut body: String, max_bytes: usize) -> String {
    if body.len() <= max_bytes {
        return body;
    }
    let mut cut = max_bytes;
    while cut > 0 && !body.is_char_boundary(cut) {
        cut -= 1;
    }
    body.truncate(cut);
    body
}

/// Issues one GET for `url` and returns the response once its status is 2xx.
///
/// # Errors
///
/// - `AuditError::HttpStatus` for a non-2xx final status
/// - `AuditError::Request` for DNS, connect, TLS and timeout failures
pub(super) async fn send_checked(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<reqwest::Response, AuditError> {
    let request = RequestHeaders::apply_to_request_builder(client.get(url)).timeout(timeout);

    let response = request.send().await.map_err(|e| {
        debug!("{} while fetching {}: {}", categorize_reqwest_error(&e), url, e);
        AuditError::Request(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        debug!(
            "{} while fetching {}",
            categorize_status(status.as_u16()),
            url
        );
        return Err(AuditError::HttpStatus {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown Status Code")
                .to_string(),
        });
    }
    Ok(response)
}

/// Reads at most `max_bytes` of body, chunk by chunk.
///
/// Returns `None` as soon as the declared `Content-Length` or the bytes read so
/// far exceed `max_bytes`; the rest of the body is never buffered. Invalid
/// UTF-8 is replaced.
pub(super) async fn read_body_capped(
    mut response: reqwest::Response,
    max_bytes: usize,
) -> Result<Option<String>, reqwest::Error> {
    if response
        .content_length()
        .is_some_and(|len| len > max_bytes as u64)
    {
        return Ok(None);
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_bytes {
            return Ok(None);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(Some(String::from_utf8_lossy(&body).into_owned()))
}

/// Issues one GET for `url` and reads the body as text.
///
/// A single attempt is made; there is no retry.
///
/// # Errors
///
/// - `AuditError::HttpStatus` for a non-2xx final status
/// - `AuditError::Request` for DNS, connect, TLS, timeout and body read failures
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    max_body_bytes: usize,
) -> Result<FetchResult, AuditError> {
    let start = Instant::now();
    let response = send_checked(client, url, timeout).await?;
    let status = response.status();

    let final_url = response.url().to_string();
    let http_version = format_version(response.version());
    let (headers, raw_headers) = collect_headers(response.headers());

    let body = response.text().await.map_err(|e| {
        debug!("{} while reading {}: {}", categorize_reqwest_error(&e), url, e);
        AuditError::Request(e)
    })?;
    let html = truncate_body(body, max_body_bytes);
    let load_time_ms = start.elapsed().as_millis() as u64;

    debug!(
        "Fetched {} -> {} ({} bytes, {} ms, {})",
        url,
        final_url,
        html.len(),
        load_time_ms,
        http_version
    );

    Ok(FetchResult {
        url: url.to_string(),
        final_url,
        http_status: status.as_u16(),
        headers,
        raw_headers,
        html,
        load_time_ms,
        http_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_respects_char_boundary() {
        let body = "ab\u{0456}cd".to_string(); // 'і' is two bytes
        let cut = truncate_body(body, 3);
        assert_eq!(cut, "ab");
    }

    #[test]
    fn test_collect_headers_folds_case_and_joins_repeats() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("Server", "NGINX".parse().unwrap());
        headers.append("Vary", "Accept".parse().unwrap());
        headers.append("Vary", "Cookie".parse().unwrap());
        let (folded, raw) = collect_headers(&headers);
        assert_eq!(folded.get("server"), Some(&"nginx".to_string()));
        assert_eq!(raw.get("server"), Some(&"NGINX".to_string()));
        assert_eq!(folded.get("vary"), Some(&"accept, cookie".to_string()));
    }

    #[test]
    fn test_format_version() {
        assert_eq!(format_version(reqwest::Version::HTTP_11), "HTTP/1.1");
        assert_eq!(format_version(reqwest::Version::HTTP_2), "HTTP/2");
    }
}
