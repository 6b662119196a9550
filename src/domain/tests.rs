// Domain module tests.

use super::*;
use proptest::prelude::*;

#[test]
fn test_analyze_domain_basic() {
    let report = analyze_domain("www.example.com");
    assert_eq!(report.hostname, "www.example.com");
    assert_eq!(report.subdomain.as_deref(), Some("www"));
    assert_eq!(report.base_domain, "example.com");
    assert_eq!(report.tld, "com");
    assert_eq!(report.public_suffix, "com");
    assert_eq!(report.tld_type, TldType::Commercial);
    assert!(!report.is_ip);
    let registry = report.registry.expect("com is in the table");
    assert_eq!(registry.registrar, "Verisign");
}

#[test]
fn test_analyze_domain_multi_part_suffix() {
    let report = analyze_domain("shop.example.co.uk");
    assert_eq!(report.base_domain, "example.co.uk");
    assert_eq!(report.subdomain.as_deref(), Some("shop"));
    assert_eq!(report.public_suffix, "co.uk");
    assert_eq!(report.tld, "uk");
    assert_eq!(report.tld_type, TldType::National);
    assert_eq!(
        report.registry.map(|r| r.country),
        Some("United Kingdom".to_string())
    );
}

#[test]
fn test_analyze_domain_no_subdomain() {
    let report = analyze_domain("Example.UA");
    assert_eq!(report.hostname, "example.ua");
    assert!(report.subdomain.is_none());
    assert_eq!(report.base_domain, "example.ua");
    assert_eq!(report.tld_type, TldType::National);
    assert_eq!(
        report.registry.map(|r| r.registrar),
        Some("Hostmaster Ltd".to_string())
    );
}

#[test]
fn test_analyze_domain_deep_subdomain() {
    let report = analyze_domain("a.b.c.example.dev");
    assert_eq!(report.subdomain.as_deref(), Some("a.b.c"));
    assert_eq!(report.base_domain, "example.dev");
    assert_eq!(report.tld_type, TldType::New);
}

#[test]
fn test_analyze_domain_ip() {
    let report = analyze_domain("127.0.0.1");
    assert!(report.is_ip);
    assert_eq!(report.base_domain, "127.0.0.1");
    assert!(report.tld.is_empty());
    assert!(report.registry.is_none());

    let v6 = analyze_domain("[::1]");
    assert!(v6.is_ip);
}

#[test]
fn test_unknown_tld_has_no_registry() {
    let report = analyze_domain("example.museum");
    assert!(report.registry.is_none());
    assert_eq!(report.tld_type, TldType::Other);
}

#[test]
fn test_classify_tld() {
    assert_eq!(classify_tld("org"), TldType::Commercial);
    assert_eq!(classify_tld("IO"), TldType::New);
    assert_eq!(classify_tld("de"), TldType::National);
    assert_eq!(classify_tld("co"), TldType::National);
    assert_eq!(classify_tld("museum"), TldType::Other);
    assert_eq!(TldType::New.to_string(), "new");
}

#[test]
fn test_registry_table_covers_twelve_tlds() {
    assert_eq!(known_tld_count(), 12);
    for tld in ["ua", "com", "org", "net", "ru", "de", "fr", "uk", "io", "dev", "app", "co"] {
        assert!(registry_info(tld).is_some(), "missing registry entry for {tld}");
    }
}

#[test]
fn test_normalize_domain() {
    assert_eq!(normalize_domain("WWW.Example.COM"), "example.com");
    assert_eq!(normalize_domain("example.com."), "example.com");
    assert_eq!(normalize_domain("wwwexample.com"), "wwwexample.com");
}

#[test]
fn test_serializes_tld_type_lowercase() {
    let json = serde_json::to_value(analyze_domain("example.io")).unwrap();
    assert_eq!(json["tldType"], "new");
    assert_eq!(json["baseDomain"], "example.io");
}

proptest! {
    #[test]
    fn prop_base_domain_is_suffix_of_hostname(
        labels in prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..4),
        tld in prop::sample::select(vec!["com", "org", "ua", "co.uk", "dev"]),
    ) {
        let host = format!("{}.{}", labels.join("."), tld);
        let report = analyze_domain(&host);
        prop_assert!(report.hostname.ends_with(&report.base_domain));
        let rebuilt = match &report.subdomain {
            Some(sub) => format!("{}.{}", sub, report.base_domain),
            None => report.base_domain.clone(),
        };
        prop_assert_eq!(rebuilt, report.hostname);
    }

    #[test]
    fn prop_normalize_domain_idempotent(domain in "(www\\.)?[a-vx-zA-VX-Z][a-zA-Z]{0,9}\\.[a-z]{2,4}") {
        let once = normalize_domain(&domain);
        prop_assert_eq!(normalize_domain(&once), once.clone());
    }
}
