//! Runtime configuration, read from the environment (and an optional `.env` file).

use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_WORLD_BANK_URL: &str = "https://api.worldbank.org/v2";
pub const DEFAULT_EXCHANGE_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub world_bank_url: String,
    pub exchange_url: String,
    /// Secret for the exchange source. Absence only matters once an exchange lookup runs.
    pub exchange_api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_bank_url: DEFAULT_WORLD_BANK_URL.into(),
            exchange_url: DEFAULT_EXCHANGE_URL.into(),
            exchange_api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read:
    /// - `EXCHANGE_API_KEY`
    /// - `WBFX_WORLD_BANK_URL`, `WBFX_EXCHANGE_URL` (base URL overrides)
    /// - `WBFX_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| {
            lookup(k)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut cfg = Self::default();
        if let Some(url) = get("WBFX_WORLD_BANK_URL") {
            cfg.world_bank_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("WBFX_EXCHANGE_URL") {
            cfg.exchange_url = url.trim_end_matches('/').to_string();
        }
        cfg.exchange_api_key = get("EXCHANGE_API_KEY");
        if let Some(secs) = get("WBFX_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("invalid WBFX_TIMEOUT_SECS '{}'", secs))?;
            cfg.timeout = Duration::from_secs(secs);
        }
        Ok(cfg)
    }
}
