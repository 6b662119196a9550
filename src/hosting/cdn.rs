//! CDN signatures.
//!
//! Non-exclusive: every matching CDN is reported, in table order.

use crate::config::{HEADER_CF_RAY, HEADER_SERVER, HEADER_VIA, HEADER_X_CACHE, HEADER_X_SERVED_BY};
use crate::tech::{Signal, SignalContext};

use Signal::*;

#[rustfmt::skip]
const CDN_RULES: &[(&str, &[Signal])] = &[
    ("Cloudflare", &[
        HeaderPresent(HEADER_CF_RAY),
        Header(HEADER_SERVER, "cloudflare"),
        Html("/cdn-cgi/"),
    ]),
    ("Amazon CloudFront", &[
        HeaderPresent("x-amz-cf-id"),
        Header(HEADER_VIA, "cloudfront"),
        Header(HEADER_X_CACHE, "cloudfront"),
        Html("cloudfront.net"),
    ]),
    ("Google CDN", &[
        Html("ajax.googleapis.com"),
        Html("gstatic.com"),
    ]),
    ("jsDelivr", &[
        Html("cdn.jsdelivr.net"),
    ]),
    ("unpkg", &[
        Html("unpkg.com"),
    ]),
    ("cdnjs", &[
        Html("cdnjs.cloudflare.com"),
    ]),
    ("Fastly", &[
        Header(HEADER_X_SERVED_BY, "cache-"),
        HeaderPresent("x-fastly-request-id"),
        Header(HEADER_VIA, "varnish"),
    ]),
    ("Azure CDN", &[
        HeaderPresent("x-azure-ref"),
        Html("azureedge.net"),
        Html("azurefd.net"),
    ]),
    ("BunnyCDN", &[
        Header(HEADER_SERVER, "bunnycdn"),
        Html("b-cdn.net"),
    ]),
    ("StackPath", &[
        Html("stackpathcdn.com"),
        Html("stackpath.bootstrapcdn.com"),
    ]),
];

/// Every CDN with at least one matching signal.
pub fn detect_cdns(ctx: &SignalContext<'_>) -> Vec<String> {
    CDN_RULES
        .iter()
        .filter(|(_, signals)| ctx.any(signals))
        .map(|(name, _)| name.to_string())
        .collect()
}
