//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the library configuration.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_USER_AGENT, MAX_COLOR_STYLESHEETS, MAX_FONT_STYLESHEETS,
    PAGE_FETCH_TIMEOUT_SECS, SEARCH_CONSOLE_API_BASE, SEO_PRO_DEMO_DELAY_MS,
    STYLESHEET_FETCH_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use site_audit::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     page_timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// assert_eq!(config.max_color_stylesheets, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Timeout for the audited page
    pub page_timeout: Duration,

    /// Timeout for each linked stylesheet
    pub stylesheet_timeout: Duration,

    /// Stylesheets scanned for colors (and, for the first ones, fonts)
    pub max_color_stylesheets: usize,

    /// Stylesheets scanned for `font-family` declarations
    pub max_font_stylesheets: usize,

    /// Delay before the SEO Pro demo payload is returned
    pub seo_pro_demo_delay: Duration,

    /// Search Console API base URL
    pub search_console_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout: Duration::from_secs(PAGE_FETCH_TIMEOUT_SECS),
            stylesheet_timeout: Duration::from_secs(STYLESHEET_FETCH_TIMEOUT_SECS),
            max_color_stylesheets: MAX_COLOR_STYLESHEETS,
            max_font_stylesheets: MAX_FONT_STYLESHEETS,
            seo_pro_demo_delay: Duration::from_millis(SEO_PRO_DEMO_DELAY_MS),
            search_console_api_base: SEARCH_CONSOLE_API_BASE.to_string(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Serve the JSON API
/// site_audit serve --bind 0.0.0.0:8080
///
/// # One-shot technical audit printed as JSON
/// site_audit audit example.com
///
/// # One-shot SEO audit with debug logging
/// site_audit --log-level debug seo https://example.com/blog
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_audit",
    about = "Audits a web page: technologies, SEO structure, hosting and visual identity."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Timeout for the audited page in seconds
    #[arg(long, default_value_t = PAGE_FETCH_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the CLI.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the audit endpoints over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND_ADDR)]
        bind: String,
    },
    /// Run a technical site audit and print the report as JSON
    Audit {
        /// URL or bare domain to audit
        url: String,
    },
    /// Run an SEO audit and print the report as JSON
    Seo {
        /// URL or bare domain to audit
        url: String,
    },
}

impl Opt {
    /// Builds the library configuration from the parsed options.
    pub fn to_config(&self) -> Config {
        Config {
            user_agent: self.user_agent.clone(),
            page_timeout: Duration::from_secs(self.timeout_seconds),
            ..Default::default()
        }
    }
}
