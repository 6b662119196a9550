//! Analytics and marketing tag detection.
//!
//! - Independent boolean checks for ~30 third-party tags
//! - Tracking ID extraction (GA, GA4, Google Ads, GTM, Meta Pixel, AdSense, Yandex Metrica)

mod tags;
mod tracking;

pub use tags::{detect_marketing_tags, TagPresence};
pub use tracking::{extract_tracking_ids, TrackingId};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
