//! Security analysis and warning detection.
//!
//! This module inspects the final URL and response headers to produce:
//! - A heuristic SSL grade (an estimate, no TLS inspection)
//! - A fixed security-header presence map
//! - Missing-header warnings

mod analysis;
mod types;

pub use analysis::{analyze_security, assess_ssl, grade_for_score, security_header_presence};
pub use types::{SecurityWarning, SslAssessment};
