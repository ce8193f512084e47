//! URL resolution: follow a short URL's redirect chain to its destination.
//!
//! The pipeline only depends on the [`Resolver`] trait. [`CurlResolver`] is
//! the libcurl-backed implementation; tests substitute their own.
//! Failures are values ([`Resolution::Failed`]), never errors: one bad row
//! must not stop the run.

mod classify;
mod http;
mod settings;
mod validate;

pub use http::CurlResolver;
pub use classify::classify_curl_error;
pub use settings::ResolverSettings;
pub use validate::validate_url;

use thiserror::Error;

/// Why a URL could not be resolved. Rendered into the output cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveFailure {
    /// Not an absolute http(s) URL; no request was made.
    #[error("invalid URL ({reason})")]
    InvalidUrl { reason: String },
    /// Redirect chain longer than the configured bound.
    #[error("too many redirects (limit {limit})")]
    TooManyRedirects { limit: u32 },
    /// The request did not finish within the timeout.
    #[error("timed out")]
    Timeout,
    /// DNS, connect, TLS or protocol failure.
    #[error("resolution failed ({0})")]
    Network(String),
    /// Chain ended on a known URL shortener (e.g. a blocked or interstitial hop).
    #[error("still on shortener domain ({host})")]
    StillOnShortener { host: String },
}

/// Outcome of resolving one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { url: String, hops: u32 },
    Failed(ResolveFailure),
}

impl Resolution {
    /// Text written to the appended column.
    pub fn cell_value(&self) -> String {
        match self {
            Resolution::Resolved { url, .. } => url.clone(),
            Resolution::Failed(failure) => format!("Error: {failure}"),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

impl From<ResolveFailure> for Resolution {
    fn from(failure: ResolveFailure) -> Self {
        Resolution::Failed(failure)
    }
}

/// Turns one input value into a [`Resolution`].
///
/// Takes `&mut self` so implementations can reuse a connection handle
/// across rows.
pub trait Resolver {
    fn resolve(&mut self, url: &str) -> Resolution;
}
