//! Hosting provider cascade.

use crate::config::{HEADER_CF_RAY, HEADER_SERVER, HEADER_VIA};
use crate::tech::{Signal, SignalContext};

use Signal::*;

/// Providers in priority order. The first match wins.
///
/// Platform hosts come before the clouds they run on, and Cloudflare comes last
/// because it fronts sites hosted anywhere.
#[rustfmt::skip]
pub(crate) const PROVIDER_RULES: &[(&str, &[Signal])] = &[
    ("Vercel", &[
        HeaderPresent("x-vercel-id"),
        Header(HEADER_SERVER, "vercel"),
    ]),
    ("Netlify", &[
        HeaderPresent("x-nf-request-id"),
        Header(HEADER_SERVER, "netlify"),
    ]),
    ("GitHub Pages", &[
        HeaderPresent("x-github-request-id"),
        Header(HEADER_SERVER, "github.com"),
    ]),
    ("Heroku", &[
        Header(HEADER_VIA, "vegur"),
        Header(HEADER_SERVER, "heroku"),
    ]),
    ("Shopify", &[
        HeaderPresent("x-shopid"),
        HeaderPresent("x-shopify-stage"),
        Html("cdn.shopify.com"),
    ]),
    ("Wix", &[
        HeaderPresent("x-wix-request-id"),
        Html("static.wixstatic.com"),
    ]),
    ("Squarespace", &[
        Header(HEADER_SERVER, "squarespace"),
        Html("static1.squarespace.com"),
    ]),
    ("Hostinger", &[
        Header("platform", "hostinger"),
        Header(HEADER_SERVER, "hostinger"),
        HeaderPresent("x-hcdn-request-id"),
    ]),
    ("DigitalOcean", &[
        Header(HEADER_SERVER, "digitalocean"),
        Html("digitaloceanspaces.com"),
        Html("ondigitalocean.app"),
    ]),
    ("AWS", &[
        HeaderPresent("x-amz-request-id"),
        HeaderPresent("x-amz-cf-id"),
        Header(HEADER_SERVER, "amazons3"),
        Header(HEADER_SERVER, "awselb"),
    ]),
    ("Google Cloud", &[
        Header(HEADER_SERVER, "google frontend"),
        HeaderPresent("x-cloud-trace-context"),
        Html("storage.googleapis.com"),
    ]),
    ("Microsoft Azure", &[
        HeaderPresent("x-azure-ref"),
        HeaderPresent("x-ms-request-id"),
        Html("azurewebsites.net"),
    ]),
    ("Hetzner", &[
        Header(HEADER_SERVER, "hetzner"),
        Html("your-server.de"),
    ]),
    ("OVH", &[
        Header(HEADER_SERVER, "ovh"),
        HeaderPresent("x-iplb-instance"),
    ]),
    ("Cloudflare", &[
        HeaderPresent(HEADER_CF_RAY),
        Header(HEADER_SERVER, "cloudflare"),
    ]),
];

/// The first provider in the cascade with a matching signal.
pub fn detect_provider(ctx: &SignalContext<'_>) -> Option<String> {
    PROVIDER_RULES
        .iter()
        .find(|(_, signals)| ctx.any(signals))
        .map(|(name, _)| name.to_string())
}
