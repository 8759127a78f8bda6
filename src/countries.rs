//! `id -> name` projection of the World Bank country list.

use crate::models::Country;
use std::collections::HashMap;

/// Region id the World Bank uses for aggregates (regions, income groups, ...).
pub const AGGREGATE_REGION: &str = "NA";

#[derive(Debug, Clone, Default)]
pub struct CountryDirectory {
    countries: Vec<Country>,
    by_id: HashMap<String, usize>,
}

impl CountryDirectory {
    pub fn new(mut countries: Vec<Country>) -> Self {
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        let by_id = countries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.to_ascii_uppercase(), i))
            .collect();
        Self { countries, by_id }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Display name for a country id, if the list has it.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.by_id
            .get(&id.trim().to_ascii_uppercase())
            .map(|&i| self.countries[i].name.as_str())
    }

    /// Real countries only (aggregates dropped), sorted by name.
    pub fn selectable(&self) -> impl Iterator<Item = &Country> {
        self.countries
            .iter()
            .filter(|c| c.region.id != AGGREGATE_REGION)
    }

    /// Selectable countries whose name contains `text`, ignoring case.
    pub fn search<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a Country> + 'a {
        let needle = text.trim().to_lowercase();
        self.selectable()
            .filter(move |c| c.name.to_lowercase().contains(&needle))
    }
}
