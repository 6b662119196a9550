//! Error type definitions.
//!
//! This module defines all error and warning types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that abort an audit.
///
/// Only input validation and the primary page fetch can fail an audit; every other
/// problem is contained by the evaluator that hit it.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The caller supplied no usable URL. No network call was made.
    #[error("{0}")]
    InvalidInput(String),

    /// The audited page answered with a non-2xx status.
    #[error("HTTP {status} {reason}")]
    HttpStatus {
        /// Status code returned by the target site
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
    },

    /// Transport failure (DNS, connect, TLS, timeout, body read) on the audited page.
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),

    /// An upstream API (Search Console) answered with something unusable.
    #[error("Upstream API error: {0}")]
    Upstream(String),
}

impl AuditError {
    /// Whether the error was caused by the caller's input (HTTP 400) rather than
    /// by an upstream failure (HTTP 500).
    pub fn is_input_error(&self) -> bool {
        matches!(self, AuditError::InvalidInput(_))
    }
}

/// Types of fetch errors, used to categorize failures in log lines and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestNotFound,
    HttpRequestServerError,
}

/// Types of warnings recorded while auditing a single page.
///
/// Warnings never fail an audit; they explain why a section may be thinner than
/// expected when reading debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    StylesheetFetchFailed,
    StylesheetTooLarge,
    JsonLdParseFailed,
    InvalidLinkUrl,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::StylesheetFetchFailed => "Stylesheet fetch failed",
            WarningType::StylesheetTooLarge => "Stylesheet too large",
            WarningType::JsonLdParseFailed => "Malformed JSON-LD block",
            WarningType::InvalidLinkUrl => "Malformed link URL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(ErrorType::HttpRequestNotFound.to_string(), "Not Found (404)");
    }

    #[test]
    fn test_all_error_types_have_descriptions() {
        for error_type in ErrorType::iter() {
            assert!(!error_type.as_str().is_empty());
        }
        for warning_type in WarningType::iter() {
            assert!(!warning_type.as_str().is_empty());
        }
    }

    #[test]
    fn test_http_status_error_message_starts_with_status() {
        let err = AuditError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_invalid_input_is_input_error() {
        let err = AuditError::InvalidInput("URL is required".to_string());
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "URL is required");
    }
}
