//! Provider → location lookup.
//!
//! Static approximations of where each provider's headquarters or main region
//! sits. No IP geolocation is performed.

use serde::Serialize;

/// Approximate server location for a known provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geolocation {
    pub country: String,
    pub city: String,
    /// Always `true`
    pub is_estimate: bool,
}

#[rustfmt::skip]
const PROVIDER_LOCATIONS: &[(&str, &str, &str)] = &[
    ("Cloudflare",      "United States", "San Francisco"),
    ("AWS",             "United States", "Seattle"),
    ("Google Cloud",    "United States", "Mountain View"),
    ("Microsoft Azure", "United States", "Redmond"),
    ("DigitalOcean",    "United States", "New York"),
    ("Vercel",          "United States", "San Francisco"),
    ("Netlify",         "United States", "San Francisco"),
    ("Heroku",          "United States", "San Francisco"),
    ("Hetzner",         "Germany",       "Falkenstein"),
    ("OVH",             "France",        "Roubaix"),
    ("Hostinger",       "Lithuania",     "Kaunas"),
];

/// Looks `provider` up in the static table. Unknown providers have no location.
pub fn lookup_geolocation(provider: &str) -> Option<Geolocation> {
    PROVIDER_LOCATIONS
        .iter()
        .find(|(name, _, _)| *name == provider)
        .map(|(_, country, city)| Geolocation {
            country: country.to_string(),
            city: city.to_string(),
            is_estimate: true,
        })
}
