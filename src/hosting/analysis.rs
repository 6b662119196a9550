//! Hosting section assembly.

use serde::Serialize;

use super::cdn::detect_cdns;
use super::geolocation::{lookup_geolocation, Geolocation};
use super::provider::detect_provider;
use crate::config::{HEADER_ALT_SVC, HEADER_CONTENT_ENCODING, HEADER_SERVER, HEADER_X_POWERED_BY};
use crate::fetch::FetchResult;
use crate::parse::Document;
use crate::security::{analyze_security, assess_ssl, security_header_presence, SslAssessment};
use crate::tech::SignalContext;
use crate::utils::FlagMap;

/// Infrastructure inferred from the response and the markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingReport {
    pub ssl: SslAssessment,
    /// `Server` header as sent
    pub server: Option<String>,
    /// `X-Powered-By` header as sent
    pub powered_by: Option<String>,
    pub cdn: Vec<String>,
    pub provider: Option<String>,
    pub http_version: String,
    /// `Alt-Svc` advertises an `h3` endpoint
    pub http3_advertised: bool,
    pub compression: Vec<String>,
    pub security_headers: FlagMap,
    pub security_issues: Vec<String>,
    pub geolocation: Option<Geolocation>,
}

/// Builds the hosting section for a fetched page.
pub fn analyze_hosting(document: &Document, page: &FetchResult) -> HostingReport {
    let ctx = SignalContext::new(document, &page.headers);

    let provider = detect_provider(&ctx);
    let geolocation = provider.as_deref().and_then(lookup_geolocation);
    if let Some(provider) = &provider {
        log::debug!("Hosting provider for {}: {}", page.final_url, provider);
    }

    HostingReport {
        ssl: assess_ssl(page.is_https(), &page.headers),
        server: page.raw_headers.get(HEADER_SERVER).cloned(),
        powered_by: page.raw_headers.get(HEADER_X_POWERED_BY).cloned(),
        cdn: detect_cdns(&ctx),
        provider,
        http_version: page.http_version.clone(),
        http3_advertised: page
            .header(HEADER_ALT_SVC)
            .is_some_and(|v| v.contains("h3")),
        compression: compression_list(page.header(HEADER_CONTENT_ENCODING)),
        security_headers: security_header_presence(&page.headers),
        security_issues: analyze_security(&page.final_url, &page.headers)
            .iter()
            .map(|w| w.description().to_string())
            .collect(),
        geolocation,
    }
}

/// Splits a `Content-Encoding` value into its codings.
fn compression_list(content_encoding: Option<&str>) -> Vec<String> {
    content_encoding
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|coding| !coding.is_empty() && *coding != "identity")
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_list() {
        assert_eq!(compression_list(Some("gzip")), vec!["gzip"]);
        assert_eq!(compression_list(Some("br, gzip")), vec!["br", "gzip"]);
        assert!(compression_list(Some("identity")).is_empty());
        assert!(compression_list(None).is_empty());
    }
}
