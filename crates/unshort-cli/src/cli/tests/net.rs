//! Tests for resolve and the shared request flags.

use super::parse;
use crate::cli::{Cli, CliCommand, MethodArg, NetArgs};
use clap::Parser;
use unshort_core::config::{RequestMethod, UnshortConfig};

#[test]
fn cli_parse_resolve_many() {
    match parse(&["unshort", "resolve", "http://bit.ly/a", "http://t.co/b"]).command {
        CliCommand::Resolve { urls, net } => {
            assert_eq!(urls, ["http://bit.ly/a", "http://t.co/b"]);
            assert!(net.max_redirects.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_resolve_requires_url() {
    assert!(Cli::try_parse_from(["unshort", "resolve"]).is_err());
}

#[test]
fn cli_parse_net_flags() {
    match parse(&[
        "unshort",
        "resolve",
        "http://bit.ly/a",
        "--max-redirects",
        "3",
        "--timeout",
        "4",
        "--method",
        "get",
    ])
    .command
    {
        CliCommand::Resolve { net, .. } => {
            assert_eq!(net.max_redirects, Some(3));
            assert_eq!(net.timeout, Some(4));
            assert_eq!(net.method, Some(MethodArg::Get));
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn net_flags_override_config() {
    let net = NetArgs {
        max_redirects: Some(2),
        timeout: None,
        method: Some(MethodArg::Get),
    };
    let cfg = net.apply(UnshortConfig::default());
    assert_eq!(cfg.max_redirects, 2);
    assert_eq!(cfg.timeout_secs, 10);
    assert_eq!(cfg.method, RequestMethod::Get);

    let untouched = NetArgs::default().apply(UnshortConfig::default());
    assert_eq!(untouched.max_redirects, 10);
    assert_eq!(untouched.method, RequestMethod::Head);
}
