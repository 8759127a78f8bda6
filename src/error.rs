//! User-facing failure kinds of a lookup.

use crate::models::Indicator;
use thiserror::Error;

/// Why a lookup produced no result. `Display` carries the structured context for logs;
/// [`FetchError::user_message`] is what the front ends show.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("no data for {indicator} in {country} for {year}")]
    NoDataForIndicator {
        country: String,
        indicator: Indicator,
        year: i32,
    },

    #[error("no currency mapped for country {country}")]
    CurrencyNotFound { country: String },

    #[error("exchange data starts in {min}, requested {year}")]
    YearUnsupported { year: i32, min: i32 },

    /// Network error, non-2xx status or malformed payload, from either source.
    #[error("transport or parse failure: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NoDataForIndicator { .. } => "This indicator has no data available.",
            FetchError::CurrencyNotFound { .. } => "No currency found for this country.",
            FetchError::YearUnsupported { .. } => {
                "Exchange rate data is not available for this year."
            }
            FetchError::Transport(_) => "Failed to fetch data.",
        }
    }

    /// Collapse any plumbing error into the generic transport kind.
    pub fn transport(err: &anyhow::Error) -> Self {
        FetchError::Transport(format!("{err:#}"))
    }
}
