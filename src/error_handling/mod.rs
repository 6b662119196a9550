//! Error handling and per-audit statistics.
//!
//! This module provides:
//! - Error type definitions (`AuditError`, `InitializationError`)
//! - Fetch error categorization
//! - Per-audit warning/error counters
//!
//! Only `AuditError` ever reaches the HTTP layer. Everything recorded in
//! `ProcessingStats` is contained locally and only shows up in debug logs.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use stats::ProcessingStats;
pub use types::{AuditError, ErrorType, InitializationError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_warning(WarningType::StylesheetFetchFailed);
        stats.increment_warning(WarningType::StylesheetFetchFailed);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        assert_eq!(
            stats.get_warning_count(WarningType::StylesheetFetchFailed),
            2
        );
        assert_eq!(stats.get_warning_count(WarningType::JsonLdParseFailed), 0);
        assert_eq!(stats.total_warnings(), 2);
        assert_eq!(stats.total_errors(), 1);
    }

    #[test]
    fn test_log_summary_does_not_panic() {
        let stats = ProcessingStats::new();
        stats.log_summary("example.com");
        stats.increment_warning(WarningType::InvalidLinkUrl);
        stats.log_summary("example.com");
    }
}
