//! Small shared helpers.
//!
//! - CSS selector parsing utilities
//! - Text normalization and numeric rounding
//! - Ordered flag maps for JSON output

mod flags;
mod selector;
mod text;

pub use flags::FlagMap;
pub(crate) use selector::class_and_id;
pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
pub use text::{collapse_whitespace, compile_regex_unsafe, round_to};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
