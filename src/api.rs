/// Blocking clients for the two upstream sources:
///
/// - the **World Bank Indicators API (v2)**: one observation per (country, indicator,
///   year), plus the country list;
/// - the **ExchangeRate-API (v6)**: latest conversion rates for a base currency,
///   authenticated by an API key in the path.
///
/// Response parsing is split into pure `parse_*` functions so that payload handling can
/// be exercised without a network.
///
/// ### Notes
/// - The World Bank API reports errors as a `message` object in position 0 of the
///   top-level array.
/// - A missing or `null` data array is *not* an error here. Deciding that "no rows"
///   means "no data" belongs to the controller. The indicator endpoint also maps an
///   API error message to "no rows"; the country list endpoint does not.
///
/// Typical usage:
/// ```no_run
/// # use wbfx_rs::{Client, Config, Indicator};
/// let client = Client::new(&Config::default())?;
/// let rows = client.fetch_observations("BRA", Indicator::Population, 2020)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::config::Config;
use crate::models::{ConversionRates, Country, Indicator, Meta, Observation};
use anyhow::{Context, Result, anyhow, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Generic "remote data fetch" capability the controller depends on.
pub trait RemoteData {
    /// Observations for one country/indicator/year (possibly empty).
    fn observations(
        &self,
        country: &str,
        indicator: Indicator,
        year: i32,
    ) -> Result<Vec<Observation>>;

    /// Latest conversion rates with `currency` as base.
    fn rates(&self, currency: &str) -> Result<ConversionRates>;
}

fn http_client(timeout: Duration) -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(timeout) // total request timeout
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(5))
        .user_agent(concat!("wbfx_rs/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("build http client")
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment.trim(), SAFE).to_string()
}

const RETRY_BACKOFF_MS: [u64; 3] = [100, 300, 700];

/// GET `url` and decode JSON. Small retry for transient failures (5xx / network errors).
fn get_json(http: &HttpClient, url: &str) -> Result<Value> {
    let mut last_err: Option<anyhow::Error> = None;
    for (attempt, backoff_ms) in RETRY_BACKOFF_MS.into_iter().enumerate() {
        match http.get(url).send() {
            Ok(r) if r.status().is_success() => {
                return r.json().context("decode json");
            }
            Ok(r) if r.status().is_server_error() => {
                log::debug!("HTTP {} from upstream, retrying", r.status());
                last_err = Some(anyhow!("HTTP {}", r.status()));
            }
            Ok(r) => bail!("request failed with HTTP {}", r.status()),
            Err(e) => last_err = Some(e.into()),
        }
        if attempt + 1 < RETRY_BACKOFF_MS.len() {
            std::thread::sleep(Duration::from_millis(backoff_ms));
        }
    }
    bail!("network error: {:?}", last_err);
}

/// Split a World Bank `[Meta, [..]]` response, surfacing API errors.
/// The data section is `None` when absent or `null` (the API's "no rows").
fn split_response(v: &Value) -> Result<(Meta, Option<&Value>)> {
    let arr = v
        .as_array()
        .ok_or_else(|| anyhow!("unexpected response shape: not a top-level array"))?;
    if arr.is_empty() {
        bail!("unexpected response: empty array");
    }
    // If first element has "message", surface API error.
    if arr[0].get("message").is_some() {
        bail!("world bank api error: {}", arr[0]);
    }
    let meta: Meta = serde_json::from_value(arr[0].clone()).context("parse meta")?;
    Ok((meta, arr.get(1).filter(|d| !d.is_null())))
}

/// Parse the indicator endpoint payload into observations.
///
/// An API error message (e.g. an unknown country code) carries no data array and is
/// reported as zero rows, like an empty result.
pub fn parse_observations(v: &Value) -> Result<Vec<Observation>> {
    if let Some(msg) = v.get(0).and_then(|m| m.get("message")) {
        log::debug!("world bank api message: {}", msg);
        return Ok(vec![]);
    }
    match split_response(v)? {
        (_, Some(data)) => serde_json::from_value(data.clone()).context("parse observations"),
        (_, None) => Ok(vec![]),
    }
}

/// Parse the country list payload.
pub fn parse_countries(v: &Value) -> Result<Vec<Country>> {
    let (meta, data) = split_response(v)?;
    if meta.pages > 1 {
        log::warn!(
            "country list has {} pages of {}, only the first is used",
            meta.pages,
            meta.per_page
        );
    }
    match data {
        Some(data) => serde_json::from_value(data.clone()).context("parse countries"),
        None => Ok(vec![]),
    }
}

/// Parse the exchange endpoint payload. `"result": "error"` becomes an error.
pub fn parse_conversion_rates(v: &Value) -> Result<ConversionRates> {
    if v.get("result").and_then(Value::as_str) == Some("error") {
        let kind = v
            .get("error-type")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        bail!("exchange api error: {}", kind);
    }
    serde_json::from_value(v.clone()).context("parse conversion rates")
}

/// Synchronous World Bank client.
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            base_url: cfg.world_bank_url.clone(),
            http: http_client(cfg.timeout)?,
        })
    }

    /// Fetch the observations of one indicator for one country and year.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - JSON decoding error
    /// - API-level error payload
    pub fn fetch_observations(
        &self,
        country: &str,
        indicator: Indicator,
        year: i32,
    ) -> Result<Vec<Observation>> {
        let url = format!(
            "{}/country/{}/indicator/{}?date={}&format=json",
            self.base_url,
            enc(country),
            enc(indicator.code()),
            year
        );
        log::debug!("GET {}", url);
        let v = get_json(&self.http, &url).with_context(|| format!("GET {}", url))?;
        parse_observations(&v)
    }

    /// Fetch the full country list (countries and aggregates) in a single page.
    pub fn fetch_countries(&self) -> Result<Vec<Country>> {
        let url = format!("{}/country?format=json&per_page=300", self.base_url);
        log::debug!("GET {}", url);
        let v = get_json(&self.http, &url).with_context(|| format!("GET {}", url))?;
        parse_countries(&v)
    }
}

/// Synchronous ExchangeRate-API client.
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    pub base_url: String,
    api_key: Option<String>,
    http: HttpClient,
}

impl ExchangeClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            base_url: cfg.exchange_url.clone(),
            api_key: cfg.exchange_api_key.clone(),
            http: http_client(cfg.timeout)?,
        })
    }

    /// Latest rates with `currency` as base.
    pub fn fetch_rates(&self, currency: &str) -> Result<ConversionRates> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("EXCHANGE_API_KEY is not set"))?;
        let path = format!("latest/{}", enc(currency));
        let url = format!("{}/{}/{}", self.base_url, enc(key), path);
        // Never log the key.
        let shown = format!("{}/***/{}", self.base_url, path);
        log::debug!("GET {}", shown);
        let v = get_json(&self.http, &url).with_context(|| format!("GET {}", shown))?;
        parse_conversion_rates(&v)
    }
}

/// Both upstream clients, as used by the binaries.
#[derive(Debug, Clone)]
pub struct Sources {
    pub world_bank: Client,
    pub exchange: ExchangeClient,
}

impl Sources {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            world_bank: Client::new(cfg)?,
            exchange: ExchangeClient::new(cfg)?,
        })
    }
}

impl RemoteData for Sources {
    fn observations(
        &self,
        country: &str,
        indicator: Indicator,
        year: i32,
    ) -> Result<Vec<Observation>> {
        self.world_bank.fetch_observations(country, indicator, year)
    }

    fn rates(&self, currency: &str) -> Result<ConversionRates> {
        self.exchange.fetch_rates(currency)
    }
}
