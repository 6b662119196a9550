//! Configuration constants.
//!
//! This module defines the fixed limits and timeouts used by the audit pipeline.

/// Timeout for the primary page fetch in seconds.
pub const PAGE_FETCH_TIMEOUT_SECS: u64 = 15;

/// Timeout for each secondary stylesheet fetch in seconds.
///
/// Each stylesheet gets its own budget; a slow stylesheet never cancels the others.
pub const STYLESHEET_FETCH_TIMEOUT_SECS: u64 = 8;

/// Maximum number of external stylesheets scanned for colors.
pub const MAX_COLOR_STYLESHEETS: usize = 10;

/// Maximum number of external stylesheets scanned for `font-family` declarations.
/// These are the first stylesheets of the color set, in document order.
pub const MAX_FONT_STYLESHEETS: usize = 5;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current desktop Chrome so that sites serve their regular markup.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (5MB) for the primary page.
/// Larger pages are truncated before parsing.
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;
/// Maximum stylesheet size in bytes (2MB). Larger stylesheets are skipped.
pub const MAX_STYLESHEET_SIZE: usize = 2 * 1024 * 1024;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// SEO thresholds
/// Inclusive optimal title length range (characters).
pub const TITLE_OPTIMAL_RANGE: (usize, usize) = (30, 60);
/// Inclusive optimal meta description length range (characters).
pub const DESCRIPTION_OPTIMAL_RANGE: (usize, usize) = (120, 160);
/// Body word count at which the content score saturates.
pub const CONTENT_WORDS_TARGET: usize = 300;
/// Sample heading texts kept per level.
pub const MAX_HEADING_SAMPLES: usize = 5;
/// Title words analyzed for keyword density.
pub const MAX_TITLE_KEYWORDS: usize = 3;

// Visual extraction limits
/// Number of fonts returned after ranking.
pub const MAX_RANKED_FONTS: usize = 10;
/// Number of colors returned after ranking.
pub const MAX_RANKED_COLORS: usize = 6;
/// Minimum score a loose `<img>` needs to be reported as the logo.
pub const LOGO_MIN_SCORE: i32 = 15;

/// Artificial delay before the SEO Pro demo payload is returned, in milliseconds.
pub const SEO_PRO_DEMO_DELAY_MS: u64 = 3000;

/// Default Search Console API base URL.
pub const SEARCH_CONSOLE_API_BASE: &str = "https://www.googleapis.com/webmasters/v3";
/// Search Console reporting window, in days.
pub const SEARCH_CONSOLE_WINDOW_DAYS: i64 = 28;
/// Rows requested from the search analytics query.
pub const SEARCH_CONSOLE_ROW_LIMIT: u32 = 25;
/// Queries listed in the SEO Pro analysis.
pub const MAX_TOP_QUERIES: usize = 10;

/// Default listen address for the HTTP service.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
