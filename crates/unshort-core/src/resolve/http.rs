//! libcurl-backed resolver.
//!
//! Issues one HEAD (or GET) with redirect following and reads the effective
//! URL and hop count back from the handle. The `Easy` handle is kept between
//! calls so keep-alive connections are reused; options are reset per request.

use std::time::Duration;

use curl::easy::Easy;

use super::classify::classify_curl_error;
use super::validate::validate_url;
use super::{Resolution, ResolveFailure, Resolver, ResolverSettings};
use crate::config::RequestMethod;

/// Final state of a completed transfer.
struct Landing {
    code: u32,
    effective_url: Option<String>,
    hops: u32,
}

pub struct CurlResolver {
    easy: Easy,
    settings: ResolverSettings,
}

impl CurlResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            easy: Easy::new(),
            settings,
        }
    }

    /// One transfer of `url`; body (if any) is discarded.
    fn transfer(&mut self, url: &str, method: RequestMethod) -> Result<Landing, curl::Error> {
        let easy = &mut self.easy;
        easy.reset();
        easy.url(url)?;
        easy.nobody(method == RequestMethod::Head)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.settings.max_redirects)?;
        easy.connect_timeout(self.settings.connect_timeout)?;
        easy.timeout(self.settings.timeout)?;
        easy.accept_encoding("")?;
        if let Some(ua) = &self.settings.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        Ok(Landing {
            code: easy.response_code()?,
            effective_url: easy.effective_url()?.map(str::to_string),
            hops: easy.redirect_count()?,
        })
    }

    fn resolve_valid(&mut self, input: &str) -> Result<Resolution, ResolveFailure> {
        let max_redirects = self.settings.max_redirects;
        let classify = move |e: curl::Error| classify_curl_error(&e, max_redirects);

        let mut landing = self.transfer(input, self.settings.method).map_err(classify)?;
        if self.settings.method == RequestMethod::Head && matches!(landing.code, 405 | 501) {
            tracing::debug!(url = input, code = landing.code, "HEAD rejected, retrying with GET");
            landing = self.transfer(input, RequestMethod::Get).map_err(classify)?;
        }

        if !(200..400).contains(&landing.code) {
            tracing::warn!(url = input, code = landing.code, "final response is not a success");
        }

        let final_url = match landing.effective_url {
            Some(effective) if landing.hops > 0 => effective,
            _ => input.to_string(),
        };

        let final_host = url::Url::parse(&final_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        if let Some(host) = final_host {
            if self.settings.is_shortener(&host) {
                return Err(ResolveFailure::StillOnShortener { host });
            }
        }

        Ok(Resolution::Resolved {
            url: final_url,
            hops: landing.hops,
        })
    }
}

impl Default for CurlResolver {
    fn default() -> Self {
        Self::new(ResolverSettings::default())
    }
}

impl Resolver for CurlResolver {
    fn resolve(&mut self, url: &str) -> Resolution {
        let input = url.trim();
        if let Err(failure) = validate_url(input) {
            tracing::debug!(url = input, %failure, "skipping request");
            return Resolution::Failed(failure);
        }

        let started = std::time::Instant::now();
        let outcome = self.resolve_valid(input).unwrap_or_else(Resolution::Failed);
        let elapsed: Duration = started.elapsed();
        match &outcome {
            Resolution::Resolved { url: last, hops } => {
                tracing::debug!(url = input, resolved = %last, hops, ?elapsed, "resolved");
            }
            Resolution::Failed(failure) => {
                tracing::info!(url = input, %failure, ?elapsed, "resolution failed");
            }
        }
        outcome
    }
}
