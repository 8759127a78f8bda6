//! Country (ISO3) to currency (ISO 4217) lookup used by the exchange-rate view.
//!
//! The table is intentionally partial. A country that is missing, or mapped to `None`
//! like Antarctica, has no currency the exchange source can be queried with.

/// Currency the exchange view converts into.
pub const TARGET_CURRENCY: &str = "BRL";

const CURRENCIES: &[(&str, Option<&str>)] = &[
    // South America
    ("BRA", Some("BRL")),
    ("ARG", Some("ARS")),
    ("CHL", Some("CLP")),
    ("COL", Some("COP")),
    ("PER", Some("PEN")),
    ("URY", Some("UYU")),
    ("PRY", Some("PYG")),
    ("BOL", Some("BOB")),
    ("ECU", Some("USD")),
    ("VEN", Some("VES")),
    // North America
    ("USA", Some("USD")),
    ("CAN", Some("CAD")),
    ("MEX", Some("MXN")),
    // Central America & Caribbean
    ("CUB", Some("CUP")),
    ("DOM", Some("DOP")),
    ("JAM", Some("JMD")),
    ("PAN", Some("PAB")),
    ("CRI", Some("CRC")),
    // Europe
    ("PRT", Some("EUR")),
    ("ESP", Some("EUR")),
    ("FRA", Some("EUR")),
    ("DEU", Some("EUR")),
    ("ITA", Some("EUR")),
    ("BEL", Some("EUR")),
    ("NLD", Some("EUR")),
    ("AUT", Some("EUR")),
    ("IRL", Some("EUR")),
    ("GRC", Some("EUR")),
    ("FIN", Some("EUR")),
    ("CHE", Some("CHF")),
    ("DNK", Some("DKK")),
    ("NOR", Some("NOK")),
    ("SWE", Some("SEK")),
    ("GBR", Some("GBP")),
    ("POL", Some("PLN")),
    ("CZE", Some("CZK")),
    ("HUN", Some("HUF")),
    ("ROU", Some("RON")),
    // Asia
    ("JPN", Some("JPY")),
    ("CHN", Some("CNY")),
    ("IND", Some("INR")),
    ("KOR", Some("KRW")),
    ("PRK", Some("KPW")),
    ("IDN", Some("IDR")),
    ("THA", Some("THB")),
    ("VNM", Some("VND")),
    ("PHL", Some("PHP")),
    ("MYS", Some("MYR")),
    ("SGP", Some("SGD")),
    ("SAU", Some("SAR")),
    ("ISR", Some("ILS")),
    ("ARE", Some("AED")),
    // Africa
    ("ZAF", Some("ZAR")),
    ("NGA", Some("NGN")),
    ("EGY", Some("EGP")),
    ("MAR", Some("MAD")),
    ("KEN", Some("KES")),
    ("ETH", Some("ETB")),
    ("GHA", Some("GHS")),
    // Oceania
    ("AUS", Some("AUD")),
    ("NZL", Some("NZD")),
    ("FJI", Some("FJD")),
    ("PNG", Some("PGK")),
    // Antarctica
    ("ATA", None),
];

/// Currency code for an ISO3 country code, or `None` when there is none to query.
pub fn lookup(country: &str) -> Option<&'static str> {
    let country = country.trim();
    CURRENCIES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country))
        .and_then(|(_, currency)| *currency)
}

/// Whether the country has a usable currency mapping.
pub fn is_mapped(country: &str) -> bool {
    lookup(country).is_some()
}

/// All `(country, currency)` pairs that resolve to a currency, in table order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    CURRENCIES
        .iter()
        .filter_map(|(code, currency)| currency.map(|c| (*code, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antarctica_has_no_currency() {
        assert_eq!(lookup("ATA"), None);
        assert!(!is_mapped("ATA"));
        assert!(entries().all(|(code, _)| code != "ATA"));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(lookup(" bra "), Some("BRL"));
        assert_eq!(lookup("deu"), Some("EUR"));
    }

    #[test]
    fn unknown_country_is_absent() {
        assert_eq!(lookup("XKX"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn table_has_no_duplicate_countries() {
        let mut codes: Vec<_> = CURRENCIES.iter().map(|(c, _)| *c).collect();
        let n = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), n);
    }
}
