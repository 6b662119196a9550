//! Security warning and grade types.

use serde::Serialize;

/// Types of security warnings that can be detected from the response alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityWarning {
    /// Site uses HTTP instead of HTTPS
    NoHttps,
    /// Missing Strict-Transport-Security (HSTS) header
    MissingHsts,
    /// Missing Content-Security-Policy header
    MissingCsp,
    /// Missing X-Content-Type-Options header
    MissingContentTypeOptions,
    /// Missing X-Frame-Options header
    MissingFrameOptions,
}

impl SecurityWarning {
    /// Returns a human-readable description of the warning
    pub fn description(&self) -> &'static str {
        match self {
            SecurityWarning::NoHttps => "Site uses HTTP instead of HTTPS",
            SecurityWarning::MissingHsts => "Missing Strict-Transport-Security (HSTS) header",
            SecurityWarning::MissingCsp => "Missing Content-Security-Policy header",
            SecurityWarning::MissingContentTypeOptions => "Missing X-Content-Type-Options header",
            SecurityWarning::MissingFrameOptions => "Missing X-Frame-Options header",
        }
    }
}

/// Heuristic SSL grade.
///
/// Derived only from the URL scheme and response headers; no TLS handshake or
/// certificate inspection takes place, so `is_estimate` is always `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SslAssessment {
    /// Whether the final URL uses HTTPS
    pub enabled: bool,
    /// Sum of the awarded points
    pub score: u32,
    /// Letter grade, `A+` through `F`
    pub grade: String,
    pub is_estimate: bool,
}
