//! Aggregated report of the site audit.

use serde::Serialize;

use crate::analytics::{TagPresence, TrackingId};
use crate::contact::ContactReport;
use crate::domain::DomainReport;
use crate::hosting::HostingReport;
use crate::parse::SocialMediaLink;
use crate::seo::PerformanceSummary;
use crate::tech::TechnologyReport;
use crate::visual::VisualReport;

/// Page identity and the headline metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    /// URL as audited, after normalization
    pub url: String,
    pub final_url: String,
    pub status_code: u16,
    pub title: String,
    pub description: String,
    pub language: Option<String>,
    pub charset: Option<String>,
    pub generator: Option<String>,
    pub http_version: String,
    pub load_time_ms: u64,
}

/// Result of the site audit. Every section is written by exactly one evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub basic: BasicInfo,
    pub technologies: TechnologyReport,
    pub analytics: TagPresence,
    pub tracking_ids: Vec<TrackingId>,
    pub visual: VisualReport,
    pub hosting: HostingReport,
    pub domain: DomainReport,
    pub social: Vec<SocialMediaLink>,
    pub contact: ContactReport,
    pub performance: PerformanceSummary,
}
