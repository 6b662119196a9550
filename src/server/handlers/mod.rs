//! HTTP handlers.

mod audit;
mod health;

pub use audit::{seo_audit_handler, seo_pro_handler, site_audit_handler};
pub use health::health_handler;
