//! Security analysis functions.

use std::collections::HashMap;

use super::{SecurityWarning, SslAssessment};
use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS, SECURITY_HEADERS,
};
use crate::utils::FlagMap;

// SSL grade points
const HTTPS_POINTS: u32 = 50;
const HSTS_POINTS: u32 = 20;
const HSTS_PRELOAD_POINTS: u32 = 10;
const FRAME_OPTIONS_POINTS: u32 = 5;
const CONTENT_TYPE_OPTIONS_POINTS: u32 = 5;
const CSP_POINTS: u32 = 10;

/// Grade thresholds, best first.
const GRADE_BUCKETS: &[(u32, &str)] = &[(90, "A+"), (80, "A"), (70, "B"), (60, "C"), (50, "D")];

/// Maps a point total to its letter grade.
pub fn grade_for_score(score: u32) -> &'static str {
    GRADE_BUCKETS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or("F")
}

/// Computes the heuristic SSL grade.
///
/// HTTPS 50, HSTS +20 (+10 more with `preload`), X-Frame-Options +5,
/// X-Content-Type-Options +5, CSP +10.
///
/// # Arguments
///
/// * `is_https` - Whether the final URL uses HTTPS
/// * `headers` - Response headers with lowercased names and values
pub fn assess_ssl(is_https: bool, headers: &HashMap<String, String>) -> SslAssessment {
    let mut score = 0;
    if is_https {
        score += HTTPS_POINTS;
    }
    if let Some(hsts) = headers.get(HEADER_STRICT_TRANSPORT_SECURITY) {
        score += HSTS_POINTS;
        if hsts.contains("preload") {
            score += HSTS_PRELOAD_POINTS;
        }
    }
    if headers.contains_key(HEADER_X_FRAME_OPTIONS) {
        score += FRAME_OPTIONS_POINTS;
    }
    if headers.contains_key(HEADER_X_CONTENT_TYPE_OPTIONS) {
        score += CONTENT_TYPE_OPTIONS_POINTS;
    }
    if headers.contains_key(HEADER_CONTENT_SECURITY_POLICY) {
        score += CSP_POINTS;
    }

    SslAssessment {
        enabled: is_https,
        score,
        grade: grade_for_score(score).to_string(),
        is_estimate: true,
    }
}

/// Presence of every header in `SECURITY_HEADERS`, in that order.
pub fn security_header_presence(headers: &HashMap<String, String>) -> FlagMap {
    SECURITY_HEADERS
        .iter()
        .map(|name| (*name, headers.contains_key(*name)))
        .collect()
}

/// Lists the security warnings for a response.
///
/// Without HTTPS the header checks are skipped.
pub fn analyze_security(final_url: &str, headers: &HashMap<String, String>) -> Vec<SecurityWarning> {
    let mut warnings = Vec::new();

    if !final_url.starts_with("https://") {
        warnings.push(SecurityWarning::NoHttps);
        return warnings;
    }

    let checks = [
        (HEADER_STRICT_TRANSPORT_SECURITY, SecurityWarning::MissingHsts),
        (HEADER_CONTENT_SECURITY_POLICY, SecurityWarning::MissingCsp),
        (
            HEADER_X_CONTENT_TYPE_OPTIONS,
            SecurityWarning::MissingContentTypeOptions,
        ),
        (HEADER_X_FRAME_OPTIONS, SecurityWarning::MissingFrameOptions),
    ];
    for (header, warning) in checks {
        if !headers.contains_key(header) {
            warnings.push(warning);
        }
    }

    warnings
}
