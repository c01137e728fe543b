// crates/countries-core/src/model/domain.rs
use crate::common::DatasetStats;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Default backend: plain `String`.
///
/// Used by the convenient aliases [`StandardBackend`] and [`DefaultDataset`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// A named entry (currency, language).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Named<B: GeoBackend> {
    pub name: B::Str,
}

impl<B: GeoBackend> Named<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

/// A country entry. Read-only once it is part of a [`Dataset`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: GeoBackend> {
    pub name: B::Str,
    /// Unique key within a dataset (alpha-3, e.g. "DEU").
    pub code: B::Str,
    /// Empty when the source has no region.
    pub region: B::Str,
    pub subregion: B::Str,
    pub capital: B::Str,
    pub population: u64,
    pub flag: B::Str,
    pub native_name: B::Str,
    pub top_level_domains: Vec<B::Str>,
    pub currencies: Vec<Named<B>>,
    pub languages: Vec<Named<B>>,
    /// Codes of neighbouring countries, in source order.
    pub borders: Vec<B::Str>,
}

impl<B: GeoBackend> Country<B> {
    /// A record with only a name and a code; every other field is empty.
    ///
    /// Combine with the `with_*` helpers to build records by hand:
    ///
    /// ```
    /// use countries_core::{Country, DefaultBackend};
    ///
    /// let de = Country::<DefaultBackend>::new("Germany", "DEU")
    ///     .with_region("Europe")
    ///     .with_borders(&["FRA", "POL"]);
    /// assert_eq!(de.borders().collect::<Vec<_>>(), vec!["FRA", "POL"]);
    /// ```
    pub fn new(name: &str, code: &str) -> Self {
        Country {
            name: B::str_from(name),
            code: B::str_from(code),
            region: B::str_from(""),
            subregion: B::str_from(""),
            capital: B::str_from(""),
            population: 0,
            flag: B::str_from(""),
            native_name: B::str_from(""),
            top_level_domains: Vec::new(),
            currencies: Vec::new(),
            languages: Vec::new(),
            borders: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = B::str_from(region);
        self
    }

    pub fn with_subregion(mut self, subregion: &str) -> Self {
        self.subregion = B::str_from(subregion);
        self
    }

    pub fn with_capital(mut self, capital: &str) -> Self {
        self.capital = B::str_from(capital);
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_borders(mut self, borders: &[&str]) -> Self {
        self.borders = borders.iter().map(|b| B::str_from(b)).collect();
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    pub fn region(&self) -> &str {
        self.region.as_ref()
    }

    pub fn subregion(&self) -> &str {
        self.subregion.as_ref()
    }

    pub fn capital(&self) -> &str {
        self.capital.as_ref()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn flag(&self) -> &str {
        self.flag.as_ref()
    }

    pub fn native_name(&self) -> &str {
        self.native_name.as_ref()
    }

    pub fn top_level_domains(&self) -> impl Iterator<Item = &str> + '_ {
        self.top_level_domains.iter().map(|s| s.as_ref())
    }

    pub fn currency_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.currencies.iter().map(Named::name)
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.iter().map(Named::name)
    }

    pub fn borders(&self) -> impl Iterator<Item = &str> + '_ {
        self.borders.iter().map(|s| s.as_ref())
    }

    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }
}

impl<B: GeoBackend> NameMatch for Country<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// An ordered, read-only sequence of countries.
///
/// Records are held behind `Arc` so that filtered views, border links and the
/// detail selection can share them without copying. A dataset is itself
/// shared as `Arc<Dataset<B>>`; the identity of that allocation is what the
/// [`CodeLookupCache`](crate::CodeLookupCache) keys on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dataset<B: GeoBackend> {
    pub countries: Vec<Arc<Country<B>>>,
}

impl<B: GeoBackend> Dataset<B> {
    pub fn new(countries: Vec<Country<B>>) -> Self {
        Dataset {
            countries: countries.into_iter().map(Arc::new).collect(),
        }
    }

    /// All countries, in source order.
    pub fn countries(&self) -> &[Arc<Country<B>>] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by code, case-insensitive (e.g. "DEU", "deu").
    ///
    /// This is a linear scan; the explorer resolves codes through the
    /// [`CodeLookupCache`](crate::CodeLookupCache) instead.
    pub fn find_by_code(&self, code: &str) -> Option<&Arc<Country<B>>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// A new dataset holding only the countries whose code is listed
    /// (case-insensitive). Records are shared, not copied.
    pub fn retain_codes(&self, codes: &[&str]) -> Self {
        Dataset {
            countries: self
                .countries
                .iter()
                .filter(|c| codes.iter().any(|code| c.code().eq_ignore_ascii_case(code)))
                .cloned()
                .collect(),
        }
    }

    /// Aggregate statistics for the dataset.
    pub fn stats(&self) -> DatasetStats {
        let codes: HashSet<&str> = self.countries.iter().map(|c| c.code()).collect();
        let regions: HashSet<&str> = self
            .countries
            .iter()
            .map(|c| c.region())
            .filter(|r| !r.is_empty())
            .collect();

        let mut border_links = 0usize;
        let mut unresolved_borders = 0usize;
        for country in &self.countries {
            for code in country.borders() {
                border_links += 1;
                if !codes.contains(code) {
                    unresolved_borders += 1;
                }
            }
        }

        DatasetStats {
            countries: self.countries.len(),
            regions: regions.len(),
            border_links,
            unresolved_borders,
        }
    }
}

impl<B: GeoBackend> Default for Dataset<B> {
    fn default() -> Self {
        Dataset {
            countries: Vec::new(),
        }
    }
}

impl<B: GeoBackend> FromIterator<Country<B>> for Dataset<B> {
    fn from_iter<I: IntoIterator<Item = Country<B>>>(iter: I) -> Self {
        Dataset {
            countries: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset<DefaultBackend> {
        Dataset::new(vec![
            Country::new("Germany", "DEU")
                .with_region("Europe")
                .with_borders(&["FRA", "POL"]),
            Country::new("France", "FRA")
                .with_region("Europe")
                .with_borders(&["DEU"]),
            Country::new("Antarctica", "ATA"),
        ])
    }

    #[test]
    fn find_by_code_is_case_insensitive() {
        let ds = sample();
        assert_eq!(ds.find_by_code("fra").map(|c| c.name()), Some("France"));
        assert!(ds.find_by_code("").is_none());
        assert!(ds.find_by_code("XYZ").is_none());
    }

    #[test]
    fn stats_count_unresolved_borders() {
        let stats = sample().stats();
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.regions, 1);
        assert_eq!(stats.border_links, 3);
        assert_eq!(stats.unresolved_borders, 1);
    }

    #[test]
    fn retain_codes_shares_records() {
        let ds = sample();
        let only_fr = ds.retain_codes(&["fra"]);
        assert_eq!(only_fr.len(), 1);
        assert!(Arc::ptr_eq(&only_fr.countries[0], &ds.countries[1]));
    }
}
