//! site_audit library: single-page website technical audits
//!
//! This library fetches one web page (plus a few of its stylesheets) and reports
//! the technology stack, analytics tags, SEO structure, hosting and security
//! headers, domain classification, contact details and visual identity (logo,
//! favicon, fonts, colors) inferred from it.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{run_site_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = site_audit::initialization::init_client(&config)?;
//!
//! let report = run_site_audit(&client, &config, "example.com").await?;
//! println!("CMS: {:?}", report.technologies.cms);
//! println!("Fonts: {:?}", report.visual.fonts);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analytics;
pub mod audit;
pub mod config;
pub mod contact;
pub mod domain;
pub mod error_handling;
pub mod fetch;
pub mod hosting;
pub mod initialization;
pub mod parse;
pub mod security;
pub mod seo;
pub mod seo_pro;
pub mod server;
pub mod tech;
mod utils;
pub mod visual;

// Re-export public API
pub use audit::{run_seo_audit, run_site_audit, AuditReport, BasicInfo};
pub use config::{Command, Config, LogFormat, LogLevel, Opt};
pub use error_handling::{AuditError, InitializationError};
pub use seo::SeoReport;
pub use seo_pro::{analyze_seo_pro, SeoProAnalysis, SeoProRequest};
pub use server::{router, start_server, AppState};
