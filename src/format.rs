//! Human-readable formatting and qualitative classification of indicator values.
//!
//! Every function here is total: negative, huge or otherwise absurd inputs still
//! produce a string. No domain validation is performed.

use crate::models::Indicator;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use std::fmt;

/// Prefix for monetary values.
pub const CURRENCY_MARKER: &str = "US$";

const THOUSAND: f64 = 1.0e3;
const MILLION: f64 = 1.0e6;
const BILLION: f64 = 1.0e9;
const TRILLION: f64 = 1.0e12;

/// Visual tier of a classification, mapped to a colour by the front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Success,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: &'static str,
    pub severity: Severity,
}

impl Classification {
    const fn new(label: &'static str, severity: Severity) -> Self {
        Self { label, severity }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Display string plus classification for one indicator value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formatted {
    pub display: String,
    pub classification: Classification,
}

/// Format and classify `value` according to the rules of `indicator`.
pub fn format_indicator(indicator: Indicator, value: f64) -> Formatted {
    Formatted {
        display: format_value(indicator, value),
        classification: classify(indicator, value),
    }
}

pub fn format_value(indicator: Indicator, value: f64) -> String {
    match indicator {
        Indicator::Gdp => format_gdp(value),
        Indicator::Population => format_population(value),
        Indicator::PovertyRate => format_percentage(value),
        Indicator::LifeExpectancy => format_years(value),
    }
}

pub fn classify(indicator: Indicator, value: f64) -> Classification {
    match indicator {
        Indicator::Gdp => classify_gdp(value),
        Indicator::Population => classify_population(value),
        Indicator::PovertyRate => classify_poverty(value),
        Indicator::LifeExpectancy => classify_life_expectancy(value),
    }
}

/// `US$ 2.1 trillion`, `US$ 450.0 billion`, ... down to a grouped plain number.
pub fn format_gdp(value: f64) -> String {
    match scale(value, true) {
        Some((scaled, word)) => format!("{CURRENCY_MARKER} {:.1} {word}", one_decimal(scaled)),
        None => format!("{CURRENCY_MARKER} {}", grouped(value)),
    }
}

/// `214.3 million inhabitants`; there is no trillion tier for people.
pub fn format_population(value: f64) -> String {
    match scale(value, false) {
        Some((scaled, word)) => format!("{:.1} {word} inhabitants", one_decimal(scaled)),
        None => format!("{} inhabitants", grouped(value)),
    }
}

/// Rounded percentage, capped at 100.
pub fn format_percentage(value: f64) -> String {
    // `+ 0.0` turns -0 into 0.
    let pct = value.round().min(100.0) + 0.0;
    format!("{pct:.0}%")
}

pub fn format_years(value: f64) -> String {
    format!("{:.0} years", value.round() + 0.0)
}

/// `1 USD = 5.43 BRL`
pub fn format_rate(rate: f64, currency: &str, target: &str) -> String {
    format!("1 {currency} = {rate:.2} {target}")
}

pub fn classify_gdp(value: f64) -> Classification {
    if value < 100.0 * BILLION {
        Classification::new("Low", Severity::Danger)
    } else if value < TRILLION {
        Classification::new("Medium", Severity::Warning)
    } else {
        Classification::new("High", Severity::Success)
    }
}

pub fn classify_population(value: f64) -> Classification {
    if value < 10.0 * MILLION {
        Classification::new("Small", Severity::Primary)
    } else if value < 100.0 * MILLION {
        Classification::new("Medium", Severity::Warning)
    } else {
        Classification::new("Large", Severity::Secondary)
    }
}

pub fn classify_poverty(value: f64) -> Classification {
    if value > 20.0 {
        Classification::new("High", Severity::Danger)
    } else if value >= 10.0 {
        Classification::new("Medium", Severity::Warning)
    } else {
        Classification::new("Low", Severity::Success)
    }
}

pub fn classify_life_expectancy(value: f64) -> Classification {
    if value < 50.0 {
        Classification::new("Low", Severity::Danger)
    } else if value < 75.0 {
        Classification::new("Medium", Severity::Warning)
    } else {
        Classification::new("High", Severity::Success)
    }
}

/// Pick the largest magnitude band `value` reaches. Returns the scaled value and its word.
fn scale(value: f64, with_trillions: bool) -> Option<(f64, &'static str)> {
    if with_trillions && value >= TRILLION {
        Some((value / TRILLION, "trillion"))
    } else if value >= BILLION {
        Some((value / BILLION, "billion"))
    } else if value >= MILLION {
        Some((value / MILLION, "million"))
    } else if value >= THOUSAND {
        Some((value / THOUSAND, "thousand"))
    } else {
        None
    }
}

/// Round to one decimal with ties away from zero; `{:.1}` alone rounds ties to even.
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Thousands-grouped number with at most two decimals, e.g. `-1,250,000.5`.
fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let int = rounded.trunc() as i64;
    let cents = ((rounded.fract().abs() * 100.0).round() as i64).min(99);

    let mut out = int.to_formatted_string(&Locale::en);
    if int == 0 && rounded < 0.0 {
        out.insert(0, '-');
    }
    if cents > 0 {
        let frac = format!("{cents:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}
