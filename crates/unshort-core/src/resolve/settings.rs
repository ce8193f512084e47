//! Per-request knobs for [`super::CurlResolver`].

use std::time::Duration;

use crate::config::{RequestMethod, UnshortConfig};

#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub max_redirects: u32,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub method: RequestMethod,
    pub user_agent: Option<String>,
    /// Lowercase host names; a chain ending on one of these is a failure.
    pub shortener_domains: Vec<String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::from(&UnshortConfig::default())
    }
}

impl From<&UnshortConfig> for ResolverSettings {
    fn from(cfg: &UnshortConfig) -> Self {
        Self {
            max_redirects: cfg.max_redirects,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            method: cfg.method,
            user_agent: cfg.user_agent.clone(),
            shortener_domains: cfg
                .shortener_domains
                .iter()
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }
}

impl ResolverSettings {
    /// True if `host` is one of the configured shortener domains.
    pub fn is_shortener(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.shortener_domains.iter().any(|d| *d == host)
    }
}
