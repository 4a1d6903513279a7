use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::http::HttpOptions;

/// HTTP transport settings (`[http]` section in config.toml).
/// Any field left out takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connect timeout in seconds. Unset means wait indefinitely.
    pub connect_timeout_secs: Option<u64>,
    /// Follow 3xx redirects.
    pub follow_redirects: bool,
    /// Redirect hop limit when following.
    pub max_redirections: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let opts = HttpOptions::default();
        Self {
            connect_timeout_secs: None,
            follow_redirects: opts.follow_redirects,
            max_redirections: opts.max_redirections,
        }
    }
}

impl HttpConfig {
    pub fn options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            follow_redirects: self.follow_redirects,
            max_redirections: self.max_redirections,
        }
    }
}

/// Global configuration loaded from `~/.config/tvfetch/config.toml`.
///
/// Only transport behaviour lives here; where vectors come from and where
/// they are written is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvfetchConfig {
    #[serde(default)]
    pub http: HttpConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tvfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TvfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TvfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TvfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
