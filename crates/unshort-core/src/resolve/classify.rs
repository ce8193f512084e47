//! Map libcurl errors onto [`ResolveFailure`].

use super::ResolveFailure;

/// Classify a curl error from a redirect-following transfer.
pub fn classify_curl_error(e: &curl::Error, max_redirects: u32) -> ResolveFailure {
    if e.is_too_many_redirects() {
        return ResolveFailure::TooManyRedirects {
            limit: max_redirects,
        };
    }
    if e.is_operation_timedout() {
        return ResolveFailure::Timeout;
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return ResolveFailure::InvalidUrl {
            reason: e.description().to_string(),
        };
    }
    let detail = match e.extra_description() {
        Some(extra) if !extra.is_empty() => format!("{}: {}", e.description(), extra),
        _ => e.description().to_string(),
    };
    ResolveFailure::Network(detail)
}
