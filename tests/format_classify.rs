use wbfx_rs::Indicator;
use wbfx_rs::format::{
    self, CURRENCY_MARKER, Severity, classify, format_gdp, format_indicator, format_percentage,
    format_population, format_years,
};

#[test]
fn gdp_uses_currency_marker_and_magnitude_word() {
    let cases = [
        (2.5e3, "thousand"),
        (7.25e6, "million"),
        (450.0e9, "billion"),
        (1.6e12, "trillion"),
        (25.0e12, "trillion"),
    ];
    for (v, word) in cases {
        let s = format_gdp(v);
        assert!(s.starts_with(CURRENCY_MARKER), "{s}");
        assert!(s.ends_with(word), "{v} -> {s}");
    }
    assert_eq!(format_gdp(1.6e12), "US$ 1.6 trillion");
    assert_eq!(format_gdp(450.0e9), "US$ 450.0 billion");
    assert_eq!(format_gdp(1_000.0), "US$ 1.0 thousand");
}

#[test]
fn one_decimal_ties_round_up() {
    assert_eq!(format_gdp(1.25e9), "US$ 1.3 billion");
    assert_eq!(format_gdp(1.25e3), "US$ 1.3 thousand");
    assert_eq!(format_gdp(7.25e6), "US$ 7.3 million");
    assert_eq!(format_population(3.25e6), "3.3 million inhabitants");
    assert_eq!(format_population(1.25e9), "1.3 billion inhabitants");
}

#[test]
fn gdp_below_thousand_is_plain_grouped_number() {
    assert_eq!(format_gdp(950.0), "US$ 950");
    assert_eq!(format_gdp(0.0), "US$ 0");
    // No domain validation: negatives still format.
    assert_eq!(format_gdp(-3_500_000.0), "US$ -3,500,000");
}

#[test]
fn gdp_classification_bands() {
    assert_eq!(classify(Indicator::Gdp, 5e10).label, "Low");
    assert_eq!(classify(Indicator::Gdp, 5e11).label, "Medium");
    assert_eq!(classify(Indicator::Gdp, 5e12).label, "High");
    assert_eq!(classify(Indicator::Gdp, 1e11).label, "Medium");
    assert_eq!(classify(Indicator::Gdp, 1e12).label, "High");
    assert_eq!(classify(Indicator::Gdp, 5e10).severity, Severity::Danger);
    assert_eq!(classify(Indicator::Gdp, 5e12).severity, Severity::Success);
}

#[test]
fn population_has_no_trillion_tier() {
    assert_eq!(format_population(214_300_000.0), "214.3 million inhabitants");
    assert_eq!(format_population(1.4e9), "1.4 billion inhabitants");
    assert_eq!(format_population(2.0e12), "2000.0 billion inhabitants");
    assert_eq!(format_population(4_500.0), "4.5 thousand inhabitants");
    assert_eq!(format_population(800.0), "800 inhabitants");
}

#[test]
fn population_classification_bands() {
    let c = classify(Indicator::Population, 9_999_999.0);
    assert_eq!((c.label, c.severity), ("Small", Severity::Primary));
    let c = classify(Indicator::Population, 10_000_000.0);
    assert_eq!((c.label, c.severity), ("Medium", Severity::Warning));
    let c = classify(Indicator::Population, 100_000_000.0);
    assert_eq!((c.label, c.severity), ("Large", Severity::Secondary));
}

#[test]
fn percentage_is_rounded_and_clamped() {
    assert_eq!(format_percentage(150.0), "100%");
    assert_eq!(format_percentage(12.6), "13%");
    assert_eq!(format_percentage(100.4), "100%");
    assert_eq!(format_percentage(3.2), "3%");
}

#[test]
fn small_negatives_do_not_print_negative_zero() {
    assert_eq!(format_percentage(-0.4), "0%");
    assert_eq!(format_years(-0.3), "0 years");
    assert_eq!(format_percentage(-1.6), "-2%");
}

#[test]
fn poverty_classification_bands() {
    assert_eq!(classify(Indicator::PovertyRate, 20.5).label, "High");
    assert_eq!(classify(Indicator::PovertyRate, 20.0).label, "Medium");
    assert_eq!(classify(Indicator::PovertyRate, 10.0).label, "Medium");
    assert_eq!(classify(Indicator::PovertyRate, 9.9).label, "Low");
    assert_eq!(
        classify(Indicator::PovertyRate, 25.0).severity,
        Severity::Danger
    );
}

#[test]
fn life_expectancy_boundaries() {
    assert_eq!(format_years(75.6), "76 years");
    assert_eq!(classify(Indicator::LifeExpectancy, 49.0).label, "Low");
    assert_eq!(classify(Indicator::LifeExpectancy, 50.0).label, "Medium");
    assert_eq!(classify(Indicator::LifeExpectancy, 74.99).label, "Medium");
    assert_eq!(classify(Indicator::LifeExpectancy, 75.0).label, "High");
}

#[test]
fn format_indicator_dispatches_per_indicator() {
    let f = format_indicator(Indicator::Gdp, 1.46e12);
    assert_eq!(f.display, "US$ 1.5 trillion");
    assert_eq!(f.classification.label, "High");

    let f = format_indicator(Indicator::PovertyRate, 4.4);
    assert_eq!(f.display, "4%");
    assert_eq!(f.classification.label, "Low");
}

#[test]
fn formatting_is_deterministic() {
    for ind in Indicator::ALL {
        for v in [0.0, 42.42, 1.23e7, 9.87e12] {
            assert_eq!(format_indicator(ind, v), format_indicator(ind, v));
        }
    }
}

#[test]
fn rate_has_two_decimals() {
    assert_eq!(format::format_rate(5.4321, "USD", "BRL"), "1 USD = 5.43 BRL");
    assert_eq!(format::format_rate(0.05, "JPY", "BRL"), "1 JPY = 0.05 BRL");
}
