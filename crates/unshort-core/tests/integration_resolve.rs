//! Integration test: curl resolver against a local redirecting server.

mod common;

use std::time::{Duration, Instant};

use unshort_core::config::RequestMethod;
use unshort_core::resolve::{CurlResolver, Resolution, ResolveFailure, Resolver, ResolverSettings};

fn settings() -> ResolverSettings {
    ResolverSettings {
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
        ..ResolverSettings::default()
    }
}

fn resolved(r: Resolution) -> (String, u32) {
    match r {
        Resolution::Resolved { url, hops } => (url, hops),
        Resolution::Failed(f) => panic!("expected success, got {f}"),
    }
}

#[test]
fn final_url_is_returned_unchanged() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    let url = format!("{base}final");
    assert_eq!(resolved(r.resolve(&url)), (url.clone(), 0));
    // Surrounding whitespace is not part of the URL.
    assert_eq!(resolved(r.resolve(&format!("  {url}\t"))), (url, 0));
}

#[test]
fn follows_chain_to_the_end() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    let (url, hops) = resolved(r.resolve(&format!("{base}hop/3")));
    assert_eq!(url, format!("{base}hop/0"));
    assert_eq!(hops, 3);
}

#[test]
fn every_redirect_status_is_followed() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    for code in [301, 303, 307, 308] {
        let (url, hops) = resolved(r.resolve(&format!("{base}status/{code}")));
        assert_eq!(url, format!("{base}final"), "status {code}");
        assert_eq!(hops, 1);
    }
}

#[test]
fn chain_longer_than_limit_is_too_many_redirects() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(ResolverSettings {
        max_redirects: 2,
        ..settings()
    });
    assert_eq!(
        r.resolve(&format!("{base}hop/5")),
        Resolution::Failed(ResolveFailure::TooManyRedirects { limit: 2 })
    );
    // Exactly at the limit is fine.
    let (_, hops) = resolved(r.resolve(&format!("{base}hop/2")));
    assert_eq!(hops, 2);
}

#[test]
fn redirect_loop_terminates() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    assert_eq!(
        r.resolve(&format!("{base}loop")),
        Resolution::Failed(ResolveFailure::TooManyRedirects { limit: 10 })
    );
}

#[test]
fn head_rejected_falls_back_to_get() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    let (url, hops) = resolved(r.resolve(&format!("{base}nohead")));
    assert_eq!(url, format!("{base}final"));
    assert_eq!(hops, 1);
}

#[test]
fn get_method_resolves_too() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(ResolverSettings {
        method: RequestMethod::Get,
        ..settings()
    });
    let (url, hops) = resolved(r.resolve(&format!("{base}hop/2")));
    assert_eq!(url, format!("{base}hop/0"));
    assert_eq!(hops, 2);
}

#[test]
fn not_found_destination_is_still_the_destination() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    let url = format!("{base}missing");
    assert_eq!(resolved(r.resolve(&url)), (url, 0));
}

#[test]
fn ending_on_shortener_domain_is_failure() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(ResolverSettings {
        shortener_domains: vec!["127.0.0.1".to_string()],
        ..settings()
    });
    assert_eq!(
        r.resolve(&format!("{base}hop/1")),
        Resolution::Failed(ResolveFailure::StillOnShortener {
            host: "127.0.0.1".to_string()
        })
    );
}

#[test]
fn handle_is_reused_across_calls() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(settings());
    for n in 0..5 {
        let (_, hops) = resolved(r.resolve(&format!("{base}hop/{n}")));
        assert_eq!(hops, n);
    }
    assert!(matches!(
        r.resolve("not a url"),
        Resolution::Failed(ResolveFailure::InvalidUrl { .. })
    ));
    let (_, hops) = resolved(r.resolve(&format!("{base}hop/1")));
    assert_eq!(hops, 1);
}

#[test]
fn stalled_server_times_out() {
    let base = common::redirect_server::start();
    let mut r = CurlResolver::new(ResolverSettings {
        connect_timeout: Duration::from_secs(1),
        timeout: Duration::from_secs(1),
        ..ResolverSettings::default()
    });
    let started = Instant::now();
    let out = r.resolve(&format!("{base}stall"));
    let elapsed = started.elapsed();
    assert_eq!(out, Resolution::Failed(ResolveFailure::Timeout));
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}
