//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// When `RUST_LOG` is set its directives win, including any for this crate;
/// `level` then only acts as the default for targets `RUST_LOG` does not name.
/// Without `RUST_LOG`, `level` applies to this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=site_audit=debug,reqwest=info site_audit serve
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = logger_builder(level, format, rust_log.as_deref());

    // try_init() so repeated initialization (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn logger_builder(level: LevelFilter, format: LogFormat, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);

    match rust_log.map(str::trim).filter(|spec| !spec.is_empty()) {
        Some(spec) => {
            builder.parse_filters(spec);
        }
        None => {
            builder.filter_module("site_audit", level);
        }
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_cli_level_applies_without_rust_log() {
        let logger = logger_builder(LevelFilter::Info, LogFormat::Plain, None).build();
        assert!(enabled(&logger, "site_audit::fetch", Level::Info));
        assert!(!enabled(&logger, "site_audit::fetch", Level::Debug));
        assert!(!enabled(&logger, "html5ever::tree_builder", Level::Warn));
    }

    #[test]
    fn test_rust_log_directive_for_crate_is_honored() {
        let logger =
            logger_builder(LevelFilter::Info, LogFormat::Json, Some("site_audit=debug,reqwest=warn")).build();
        assert!(enabled(&logger, "site_audit::fetch", Level::Debug));
        assert!(!enabled(&logger, "reqwest::connect", Level::Info));
        // Targets RUST_LOG does not name keep the CLI default
        assert!(enabled(&logger, "axum::serve", Level::Info));
        assert!(!enabled(&logger, "axum::serve", Level::Debug));
    }

    #[test]
    fn test_blank_rust_log_falls_back_to_cli_level() {
        let logger = logger_builder(LevelFilter::Warn, LogFormat::Plain, Some("  ")).build();
        assert!(!enabled(&logger, "site_audit::audit", Level::Info));
        assert!(enabled(&logger, "site_audit::audit", Level::Warn));
    }

    #[test]
    fn test_init_logger_twice_returns_error_instead_of_panicking() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Json);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(second.is_err());
        assert!(second
            .unwrap_err()
            .to_string()
            .contains("Logger initialization error"));
    }
}
