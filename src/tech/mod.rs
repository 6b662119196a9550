//! Technology, CMS and framework detection.
//!
//! A declarative, ordered rule table (`rules`) evaluated against the lowercased HTML,
//! the DOM, the response headers and the `generator` meta tag (`detection`).

mod detection;
mod rules;

pub use detection::{detect_technologies, extract_cms_version, SignalContext, TechnologyReport};
pub use rules::{Category, Signal, TechRule, TECH_RULES};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
