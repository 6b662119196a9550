//! Audit entry points.
//!
//! Each audit normalizes the input, fetches the page once, parses it and hands
//! the same [`Document`](crate::parse::Document) to every evaluator. Evaluators
//! write disjoint report sections and never fail the audit.

mod report;
mod seo;
mod site;

pub use report::{AuditReport, BasicInfo};
pub use seo::run_seo_audit;
pub use site::run_site_audit;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
