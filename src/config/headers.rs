//! HTTP header name constants.
//!
//! Header names are lowercase because fetched headers are stored with lowercased keys.

// Security header names
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";

/// Security headers reported in the hosting section's presence map.
/// To add/remove headers, modify this array.
pub const SECURITY_HEADERS: &[&str] = &[
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_XSS_PROTECTION,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
];

// Infrastructure/Server identification
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";
/// X-Powered-By header (identifies server framework)
pub const HEADER_X_POWERED_BY: &str = "x-powered-by";
/// X-Generator header (identifies CMS/generator)
pub const HEADER_X_GENERATOR: &str = "x-generator";

// CDN/Proxy identification
/// CF-Ray header (Cloudflare request ID)
pub const HEADER_CF_RAY: &str = "cf-ray";
/// X-Served-By header (Fastly server identification)
pub const HEADER_X_SERVED_BY: &str = "x-served-by";
/// Via header (proxy chain information)
pub const HEADER_VIA: &str = "via";
/// X-Cache header (cache status)
pub const HEADER_X_CACHE: &str = "x-cache";

// Transport
/// Content-Encoding header
pub const HEADER_CONTENT_ENCODING: &str = "content-encoding";
/// Alt-Svc header (HTTP/3 advertisement)
pub const HEADER_ALT_SVC: &str = "alt-svc";
