//! Cheap syntactic check before any network call.

use url::Url;

use super::ResolveFailure;

/// Parses `raw` (already trimmed) as an absolute http(s) URL with a host.
pub fn validate_url(raw: &str) -> Result<Url, ResolveFailure> {
    let invalid = |reason: String| ResolveFailure::InvalidUrl { reason };

    if raw.is_empty() {
        return Err(invalid("empty".to_string()));
    }
    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(invalid("missing host".to_string())),
    }
}
