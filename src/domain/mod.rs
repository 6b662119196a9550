//! Domain analysis.
//!
//! This module splits a hostname into subdomain, registrable domain and TLD
//! using the Public Suffix List (PSL), classifies the TLD and attaches static
//! registry data.
//!
//! Key functions:
//! - `analyze_domain()` - Builds the domain section for a hostname
//! - `normalize_domain()` - Lowercases and strips `www.`
//! - `classify_tld()` - Buckets a TLD

mod registry;

use std::net::IpAddr;

use serde::Serialize;

pub use registry::{known_tld_count, registry_info, RegistryInfo};

/// Original generic TLDs.
const COMMERCIAL_TLDS: &[&str] = &["com", "net", "org", "biz", "info"];

/// Newer TLDs marketed generically, including country codes sold as generic.
const NEW_TLDS: &[&str] = &[
    "app", "dev", "io", "ai", "xyz", "tech", "online", "site", "store", "shop", "blog", "cloud",
    "digital", "agency", "space", "website",
];

/// Broad TLD family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TldType {
    Commercial,
    National,
    New,
    Other,
}

/// Domain section of the audit report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub hostname: String,
    /// Labels in front of the registrable domain, e.g. `www` or `blog.eu`
    pub subdomain: Option<String>,
    /// Registrable domain per the PSL, e.g. `example.co.uk`
    pub base_domain: String,
    /// Last label only, e.g. `uk` for `example.co.uk`
    pub tld: String,
    /// Public suffix, e.g. `co.uk`
    pub public_suffix: String,
    pub tld_type: TldType,
    pub is_ip: bool,
    pub registry: Option<RegistryInfo>,
}

/// Lowercases a domain name and strips a leading `www.`.
pub fn normalize_domain(domain: &str) -> String {
    let lower = domain.trim().trim_end_matches('.').to_lowercase();
    lower
        .strip_prefix("www.")
        .map(str::to_string)
        .unwrap_or(lower)
}

/// Buckets a TLD (without the leading dot).
pub fn classify_tld(tld: &str) -> TldType {
    let tld = tld.to_lowercase();
    if COMMERCIAL_TLDS.contains(&tld.as_str()) {
        TldType::Commercial
    } else if NEW_TLDS.contains(&tld.as_str()) {
        TldType::New
    } else if tld.len() == 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) {
        TldType::National
    } else {
        TldType::Other
    }
}

/// Registrable domain of `host` per the PSL, falling back to the host itself.
pub fn registrable_domain(host: &str) -> String {
    let host = host.trim_end_matches('.').to_lowercase();
    psl::domain(host.as_bytes())
        .and_then(|d| std::str::from_utf8(d.as_bytes()).ok().map(str::to_string))
        .unwrap_or(host)
}

/// Builds the domain section for `host`.
///
/// IP addresses have no registrable domain; they are reported as-is with an
/// empty TLD.
pub fn analyze_domain(host: &str) -> DomainReport {
    let hostname = host.trim_end_matches('.').to_lowercase();
    let bare = hostname.trim_start_matches('[').trim_end_matches(']');

    if bare.parse::<IpAddr>().is_ok() {
        return DomainReport {
            hostname: hostname.clone(),
            subdomain: None,
            base_domain: hostname,
            tld: String::new(),
            public_suffix: String::new(),
            tld_type: TldType::Other,
            is_ip: true,
            registry: None,
        };
    }

    let base_domain = registrable_domain(&hostname);
    let public_suffix = psl::suffix(hostname.as_bytes())
        .and_then(|s| std::str::from_utf8(s.as_bytes()).ok().map(str::to_string))
        .unwrap_or_default();
    let tld = hostname.rsplit('.').next().unwrap_or_default().to_string();
    let subdomain = hostname
        .strip_suffix(&base_domain)
        .map(|prefix| prefix.trim_end_matches('.'))
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string);

    DomainReport {
        subdomain,
        tld_type: classify_tld(&tld),
        registry: registry_info(&tld),
        hostname,
        base_domain,
        public_suffix,
        tld,
        is_ip: false,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
