use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The four World Bank indicators this crate knows how to format and classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    LifeExpectancy,
    Population,
    PovertyRate,
    Gdp,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::LifeExpectancy,
        Indicator::Population,
        Indicator::PovertyRate,
        Indicator::Gdp,
    ];

    /// Indicator id as used by the World Bank API.
    pub fn code(self) -> &'static str {
        match self {
            Indicator::LifeExpectancy => "SP.DYN.LE00.IN",
            Indicator::Population => "SP.POP.TOTL",
            Indicator::PovertyRate => "SI.POV.DDAY",
            Indicator::Gdp => "NY.GDP.MKTP.CD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Indicator::LifeExpectancy => "Life expectancy",
            Indicator::Population => "Population",
            Indicator::PovertyRate => "Poverty rate",
            Indicator::Gdp => "GDP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user asked for: one World Bank indicator or the exchange-rate view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Indicator(Indicator),
    ExchangeRate,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Indicator(Indicator::LifeExpectancy),
        Metric::Indicator(Indicator::Population),
        Metric::Indicator(Indicator::PovertyRate),
        Metric::Indicator(Indicator::Gdp),
        Metric::ExchangeRate,
    ];

    /// Pseudo-code used for the exchange-rate choice, next to the World Bank ids.
    pub const EXCHANGE_RATE_CODE: &'static str = "EXCHANGE_RATE";

    pub fn code(self) -> &'static str {
        match self {
            Metric::Indicator(i) => i.code(),
            Metric::ExchangeRate => Self::EXCHANGE_RATE_CODE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Indicator(i) => i.label(),
            Metric::ExchangeRate => "Exchange rate",
        }
    }

    /// First year the upstream source has data for.
    pub fn min_year(self) -> i32 {
        match self {
            Metric::Indicator(_) => Query::MIN_YEAR,
            Metric::ExchangeRate => 2000,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    /// Accepts upstream codes (`SP.POP.TOTL`, `EXCHANGE_RATE`) or short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Self::EXCHANGE_RATE_CODE) {
            return Ok(Metric::ExchangeRate);
        }
        if let Some(i) = Indicator::from_code(s) {
            return Ok(Metric::Indicator(i));
        }
        let alias = s.to_ascii_lowercase().replace('_', "-");
        match alias.as_str() {
            "life-expectancy" | "life" => Ok(Metric::Indicator(Indicator::LifeExpectancy)),
            "population" | "pop" => Ok(Metric::Indicator(Indicator::Population)),
            "poverty" | "poverty-rate" => Ok(Metric::Indicator(Indicator::PovertyRate)),
            "gdp" => Ok(Metric::Indicator(Indicator::Gdp)),
            "exchange-rate" | "exchange" | "fx" => Ok(Metric::ExchangeRate),
            _ => anyhow::bail!(
                "unknown metric '{}', expected one of: life-expectancy, population, poverty, gdp, exchange-rate",
                s
            ),
        }
    }
}

/// One lookup request. Built from user input, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    country: String,
    metric: Metric,
    year: i32,
}

impl Query {
    pub const MIN_YEAR: i32 = 1960;

    pub fn new(country: &str, metric: Metric, year: i32) -> anyhow::Result<Self> {
        let country = country.trim().to_ascii_uppercase();
        if country.is_empty() {
            anyhow::bail!("country code required (e.g., BRA, USA, DEU)");
        }
        if year < Self::MIN_YEAR {
            anyhow::bail!("year must be {} or later, got {}", Self::MIN_YEAR, year);
        }
        Ok(Self {
            country,
            metric,
            year,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Metadata section returned by the World Bank API (position 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub pages: u32,
    /// Some responses encode `per_page` as a string, others as a number.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    pub total: u32,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl Visitor<'_> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeName {
    pub id: String,
    pub value: String,
}

/// One observation from the indicator endpoint (position 1 array).
/// Only the fields this crate reads are modelled; the rest is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub value: Option<f64>,
    pub date: String,
}

/// Entry of the country list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub region: CodeName,
}

/// Payload of the exchange-rate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRates {
    pub base_code: Option<String>,
    pub conversion_rates: BTreeMap<String, f64>,
}

/// A successful indicator lookup, ready for formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub country: String,
    pub indicator: Indicator,
    pub value: f64,
    /// Year as reported by the API (`date` field), kept verbatim.
    pub year: String,
}

/// A successful exchange-rate lookup: `1 currency = rate target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResult {
    pub rate: f64,
    pub currency: String,
    pub target: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    Indicator(IndicatorResult),
    Exchange(ExchangeResult),
}
