use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default bound on redirect hops before a URL is reported as looping.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Name of the appended column when none is configured.
pub const DEFAULT_OUTPUT_COLUMN: &str = "unshortened_url";

/// HTTP method used to walk the redirect chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    /// HEAD first; falls back to GET once if the server rejects HEAD (405/501).
    #[default]
    Head,
    /// Always GET (body discarded).
    Get,
}

/// Global configuration loaded from `~/.config/unshort/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnshortConfig {
    /// Maximum number of redirects followed per URL.
    pub max_redirects: u32,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per request (all hops), in seconds.
    pub timeout_secs: u64,
    /// Request method: "head" (default) or "get".
    #[serde(default)]
    pub method: RequestMethod,
    /// Optional User-Agent header (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Header of the appended column.
    #[serde(default = "default_output_column")]
    pub output_column: String,
    /// Prefix added to the input file name for the default output path.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Hosts that still count as "shortened" when a chain ends on them.
    #[serde(default = "default_shortener_domains")]
    pub shortener_domains: Vec<String>,
}

fn default_output_column() -> String {
    DEFAULT_OUTPUT_COLUMN.to_string()
}

fn default_output_prefix() -> String {
    "unshortened_".to_string()
}

fn default_shortener_domains() -> Vec<String> {
    ["bit.ly", "tinyurl.com", "goo.gl", "t.co", "shorturl.at", "lnkd.in"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for UnshortConfig {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            connect_timeout_secs: 5,
            timeout_secs: 10,
            method: RequestMethod::Head,
            user_agent: None,
            output_column: default_output_column(),
            output_prefix: default_output_prefix(),
            shortener_domains: default_shortener_domains(),
        }
    }
}

impl UnshortConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("unshort")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UnshortConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UnshortConfig> {
    if !path.exists() {
        let default_cfg = UnshortConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UnshortConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
