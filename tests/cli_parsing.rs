//! Tests for CLI subcommand parsing.

use clap::Parser;
use site_audit::{Command, LogFormat, Opt};

#[test]
fn test_audit_requires_url() {
    assert!(Opt::try_parse_from(["site_audit", "audit"]).is_err());
    assert!(Opt::try_parse_from(["site_audit", "seo"]).is_err());
}

#[test]
fn test_subcommand_is_required() {
    assert!(Opt::try_parse_from(["site_audit"]).is_err());
}

#[test]
fn test_rejects_unknown_log_level() {
    let result = Opt::try_parse_from(["site_audit", "--log-level", "verbose", "serve"]);
    assert!(result.is_err());
}

#[test]
fn test_json_log_format_and_custom_bind() {
    let opt = Opt::try_parse_from([
        "site_audit",
        "--log-format",
        "json",
        "serve",
        "--bind",
        "0.0.0.0:8080",
    ])
    .unwrap();
    assert!(matches!(opt.log_format, LogFormat::Json));
    match opt.command {
        Command::Serve { bind } => assert_eq!(bind, "0.0.0.0:8080"),
        other => panic!("expected serve, got {:?}", other),
    }
}

#[test]
fn test_user_agent_flows_into_config() {
    let opt = Opt::try_parse_from([
        "site_audit",
        "--user-agent",
        "AuditBot/1.0",
        "audit",
        "example.com",
    ])
    .unwrap();
    assert_eq!(opt.to_config().user_agent, "AuditBot/1.0");
}
