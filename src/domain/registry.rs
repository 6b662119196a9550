//! Static TLD registry reference data.
//!
//! A fixed table, not a WHOIS lookup. TLDs outside the table have no entry.

use serde::Serialize;

/// Registry details for a top-level domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryInfo {
    pub registrar: String,
    pub organization: String,
    pub country: String,
}

#[rustfmt::skip]
const TLD_REGISTRY: &[(&str, &str, &str, &str)] = &[
    ("ua",  "Hostmaster Ltd",                "Hostmaster Ltd",                               "Ukraine"),
    ("com", "Verisign",                      "VeriSign Global Registry Services",            "United States"),
    ("org", "Public Interest Registry",      "Public Interest Registry (PIR)",               "United States"),
    ("net", "Verisign",                      "VeriSign Global Registry Services",            "United States"),
    ("ru",  "Coordination Center for TLD RU", "Coordination Center for TLD RU",              "Russia"),
    ("de",  "DENIC eG",                      "DENIC eG",                                     "Germany"),
    ("fr",  "AFNIC",                         "Association Française pour le Nommage Internet en Coopération", "France"),
    ("uk",  "Nominet UK",                    "Nominet UK",                                   "United Kingdom"),
    ("io",  "Internet Computer Bureau",      "Internet Computer Bureau Ltd",                 "United Kingdom"),
    ("dev", "Google Registry",               "Charleston Road Registry Inc.",                "United States"),
    ("app", "Google Registry",               "Charleston Road Registry Inc.",                "United States"),
    ("co",  ".CO Internet",                  ".CO Internet S.A.S.",                          "Colombia"),
];

/// Looks a TLD (without the leading dot, any case) up in the registry table.
pub fn registry_info(tld: &str) -> Option<RegistryInfo> {
    let tld = tld.to_lowercase();
    TLD_REGISTRY
        .iter()
        .find(|(key, _, _, _)| *key == tld)
        .map(|(_, registrar, organization, country)| RegistryInfo {
            registrar: registrar.to_string(),
            organization: organization.to_string(),
            country: country.to_string(),
        })
}

/// Number of TLDs with registry data.
pub fn known_tld_count() -> usize {
    TLD_REGISTRY.len()
}
