//! Hosting, CDN and security analysis.
//!
//! This module combines:
//! - The heuristic SSL grade and security headers (see `security`)
//! - CDN detection (non-exclusive)
//! - A hosting provider cascade (first match wins)
//! - A static provider → location table

mod analysis;
mod cdn;
mod geolocation;
mod provider;

pub use analysis::{analyze_hosting, HostingReport};
pub use cdn::detect_cdns;
pub use geolocation::{lookup_geolocation, Geolocation};
pub use provider::detect_provider;
