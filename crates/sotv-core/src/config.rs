use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::inventory::{default_seed_banks, SeedBank};

/// Lookup endpoint of the deployed resolver function.
pub const DEFAULT_ENDPOINT: &str =
    "https://wdl3umx2og7kdf447gfhaebpme0owqcb.lambda-url.us-east-1.on.aws/";

/// What drives the expiry countdown once a signed URL is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirySource {
    /// Fixed display window of `countdown_minutes`, whatever the server reports.
    #[default]
    Fixed,
    /// `expires_in_minutes` from the lookup response.
    Server,
}

/// Global configuration loaded from `~/.config/sotv/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SotvConfig {
    /// Lookup endpoint receiving `POST {"url": ...}`.
    pub endpoint: String,
    /// TCP/TLS connect timeout for the lookup request.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for the lookup request.
    pub request_timeout_secs: u64,
    /// Length of the fixed countdown window.
    pub countdown_minutes: u64,
    #[serde(default)]
    pub expiry_source: ExpirySource,
    /// Minimum query length before the strain search reacts.
    pub search_min_chars: usize,
    /// Emit analytics events to the log (false = drop them).
    #[serde(default = "default_true")]
    pub analytics: bool,
    /// Example product URLs printed by `sotv samples`.
    #[serde(default)]
    pub sample_urls: Vec<String>,
    /// Filter contents: seed banks and their strain counts.
    #[serde(default = "default_seed_banks")]
    pub seed_banks: Vec<SeedBank>,
}

fn default_true() -> bool {
    true
}

impl Default for SotvConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            countdown_minutes: 5,
            expiry_source: ExpirySource::Fixed,
            search_min_chars: 3,
            analytics: true,
            sample_urls: vec![
                "https://www.northatlanticseed.com/product/og-kush-f-3/".to_string(),
                "https://www.seedsman.com/us-en/platinum-green-apple-candy-feminized-seeds-atl-pgac-fem"
                    .to_string(),
                "https://ilgm.com/products/critical-mass-feminized-seeds".to_string(),
            ],
            seed_banks: default_seed_banks(),
        }
    }
}

impl SotvConfig {
    /// Countdown length for a response advertising `expires_in_minutes`.
    ///
    /// Server values are truncated to whole seconds; negative or non-finite ones give zero.
    pub fn countdown_window(&self, expires_in_minutes: &serde_json::Number) -> Duration {
        match self.expiry_source {
            ExpirySource::Fixed => Duration::from_secs(self.countdown_minutes.saturating_mul(60)),
            ExpirySource::Server => {
                let secs = expires_in_minutes.as_f64().unwrap_or(0.0) * 60.0;
                if secs.is_finite() && secs > 0.0 {
                    Duration::from_secs(secs.min(u64::MAX as f64) as u64)
                } else {
                    Duration::ZERO
                }
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sotv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SotvConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<SotvConfig> {
    if !path.exists() {
        let default_cfg = SotvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg).context("serialize default config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SotvConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
