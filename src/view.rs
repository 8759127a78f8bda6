//! Which result card is authoritative, and what it shows.

use crate::controller::RequestState;
use crate::format::{self, Formatted};
use crate::models::{Indicator, Metric, Payload};
use serde::Serialize;
use std::fmt;

/// The card chosen at submit time. Data arrival never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Indicator,
    Exchange,
}

impl View {
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::ExchangeRate => View::Exchange,
            Metric::Indicator(_) => View::Indicator,
        }
    }
}

/// Render-ready content of the display slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "card", rename_all = "snake_case")]
pub enum Card {
    Idle,
    Loading {
        view: View,
    },
    Failed {
        view: View,
        message: String,
    },
    Indicator {
        /// Country name when known, otherwise the code.
        country: String,
        indicator: Indicator,
        #[serde(flatten)]
        value: Formatted,
        year: String,
    },
    Exchange {
        currency: String,
        target: String,
        rate: f64,
        display: String,
        year: i32,
    },
}

impl Card {
    /// Build the card for `view` from a request snapshot. A result of the other kind is
    /// not shown.
    pub fn from_state(view: View, state: &RequestState, country_name: Option<&str>) -> Self {
        if state.is_loading() {
            return Card::Loading { view };
        }
        if let Some(err) = state.error() {
            return Card::Failed {
                view,
                message: err.user_message().to_string(),
            };
        }
        match (view, state.result()) {
            (View::Indicator, Some(Payload::Indicator(r))) => Card::Indicator {
                country: country_name.unwrap_or(&r.country).to_string(),
                indicator: r.indicator,
                value: format::format_indicator(r.indicator, r.value),
                year: r.year.clone(),
            },
            (View::Exchange, Some(Payload::Exchange(r))) => Card::Exchange {
                currency: r.currency.clone(),
                target: r.target.clone(),
                rate: r.rate,
                display: format::format_rate(r.rate, &r.currency, &r.target),
                year: r.year,
            },
            _ => Card::Idle,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Idle => Ok(()),
            Card::Loading {
                view: View::Indicator,
            } => write!(f, "Loading data..."),
            Card::Loading {
                view: View::Exchange,
            } => write!(f, "Loading exchange rate..."),
            Card::Failed { message, .. } => write!(f, "{}", message),
            Card::Indicator {
                country,
                indicator,
                value,
                year,
            } => {
                writeln!(f, "{}", country)?;
                writeln!(
                    f,
                    "{}: {} [{}]",
                    indicator, value.display, value.classification
                )?;
                write!(f, "Year: {}", year)
            }
            Card::Exchange { display, .. } => {
                writeln!(f, "Exchange rate")?;
                writeln!(f, "{}", display)?;
                write!(f, "Current rate (market reference)")
            }
        }
    }
}
