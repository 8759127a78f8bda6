use std::collections::HashMap;
use std::time::Duration;
use wbfx_rs::Config;
use wbfx_rs::config::{DEFAULT_EXCHANGE_URL, DEFAULT_WORLD_BANK_URL};

fn from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|k| map.get(k).cloned())
}

#[test]
fn defaults_without_environment() {
    let cfg = from(&[]).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.world_bank_url, DEFAULT_WORLD_BANK_URL);
    assert_eq!(cfg.exchange_url, DEFAULT_EXCHANGE_URL);
    assert_eq!(cfg.exchange_api_key, None);
}

#[test]
fn reads_key_and_overrides() {
    let cfg = from(&[
        ("EXCHANGE_API_KEY", " abc123 "),
        ("WBFX_WORLD_BANK_URL", "http://localhost:8080/v2/"),
        ("WBFX_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.exchange_api_key.as_deref(), Some("abc123"));
    assert_eq!(cfg.world_bank_url, "http://localhost:8080/v2");
    assert_eq!(cfg.timeout, Duration::from_secs(5));
}

#[test]
fn empty_key_counts_as_missing() {
    let cfg = from(&[("EXCHANGE_API_KEY", "")]).unwrap();
    assert_eq!(cfg.exchange_api_key, None);
}

#[test]
fn bad_timeout_is_rejected() {
    assert!(from(&[("WBFX_TIMEOUT_SECS", "soon")]).is_err());
}
